//! Ready-made [`RuleLogic`] implementations

use nanordr_domain::{Conclusion, InputCase, RuleFault, RuleLogic};

/// Always matches and concludes nothing; the logic of `Root`
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl RuleLogic for Always {
    fn matches(&self, _case: &InputCase) -> Result<bool, RuleFault> {
        Ok(true)
    }

    fn act(&self, _case: &InputCase) -> Result<Conclusion, RuleFault> {
        Ok(Conclusion::empty())
    }
}

/// Infallible logic backed by a predicate closure and an action closure
pub struct FnLogic<C, A> {
    condition: C,
    action: A,
}

impl<C, A> FnLogic<C, A>
where
    C: Fn(&InputCase) -> bool + Send + Sync,
    A: Fn(&InputCase) -> Conclusion + Send + Sync,
{
    /// Wrap a condition and an action
    pub fn new(condition: C, action: A) -> Self {
        Self { condition, action }
    }
}

impl<C, A> RuleLogic for FnLogic<C, A>
where
    C: Fn(&InputCase) -> bool + Send + Sync,
    A: Fn(&InputCase) -> Conclusion + Send + Sync,
{
    fn matches(&self, case: &InputCase) -> Result<bool, RuleFault> {
        Ok((self.condition)(case))
    }

    fn act(&self, case: &InputCase) -> Result<Conclusion, RuleFault> {
        Ok((self.action)(case))
    }
}

/// Logic backed by closures that may raise a [`RuleFault`]
pub struct TryFnLogic<C, A> {
    condition: C,
    action: A,
}

impl<C, A> TryFnLogic<C, A>
where
    C: Fn(&InputCase) -> Result<bool, RuleFault> + Send + Sync,
    A: Fn(&InputCase) -> Result<Conclusion, RuleFault> + Send + Sync,
{
    /// Wrap a fallible condition and a fallible action
    pub fn new(condition: C, action: A) -> Self {
        Self { condition, action }
    }
}

impl<C, A> RuleLogic for TryFnLogic<C, A>
where
    C: Fn(&InputCase) -> Result<bool, RuleFault> + Send + Sync,
    A: Fn(&InputCase) -> Result<Conclusion, RuleFault> + Send + Sync,
{
    fn matches(&self, case: &InputCase) -> Result<bool, RuleFault> {
        (self.condition)(case)
    }

    fn act(&self, case: &InputCase) -> Result<Conclusion, RuleFault> {
        (self.action)(case)
    }
}
