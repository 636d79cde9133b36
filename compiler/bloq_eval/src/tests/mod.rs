//! Evaluator test suites and shared helpers.
//!
//! Suites that outgrew their implementation files live here; smaller ones
//! sit next to the code as `<module>/tests.rs`.


pub(crate) mod helpers {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use bloq_ir::ArithmeticOp;
    use bloq_value::{EvalContext, EvalResult, Value};

    use crate::{build, Literal, Operand};

    pub(crate) fn lit(value: impl Into<Value>) -> Box<dyn Operand> {
        Literal::boxed(value)
    }

    pub(crate) fn boxed(operand: impl Operand + 'static) -> Box<dyn Operand> {
        Box::new(operand)
    }

    pub(crate) fn arithmetic(
        operands: Vec<Box<dyn Operand>>,
        operators: Vec<ArithmeticOp>,
    ) -> Box<dyn Operand> {
        build(operands, operators).unwrap()
    }

    pub(crate) fn eval(expr: &dyn Operand) -> EvalResult {
        expr.evaluate(&EvalContext::empty())
    }

    /// Operand returning a fixed result and counting how often it ran.
    #[derive(Debug)]
    pub(crate) struct Probe {
        calls: Arc<AtomicUsize>,
        result: EvalResult,
    }

    impl Probe {
        pub(crate) fn new(result: EvalResult) -> (Box<dyn Operand>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let probe = Probe {
                calls: Arc::clone(&calls),
                result,
            };
            (Box::new(probe), calls)
        }
    }

    impl Operand for Probe {
        fn evaluate(&self, _ctx: &EvalContext<'_>) -> EvalResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    pub(crate) fn calls(counter: &Arc<AtomicUsize>) -> usize {
        counter.load(Ordering::SeqCst)
    }
}
