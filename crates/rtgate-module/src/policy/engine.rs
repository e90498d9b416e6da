use rtgate_core::catalog::{Partition, RequestOp, SocketOp};

use super::allowlist::Allowlists;

/// Enabled/disabled split for both families.
/// Computed per install and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePlan {
    pub socket: Partition<SocketOp>,
    pub request: Partition<RequestOp>,
}

impl GatePlan {
    pub fn compute(allow: &Allowlists) -> Self {
        Self {
            socket: Partition::compute(&allow.socket),
            request: Partition::compute(&allow.request),
        }
    }

    pub fn gated_total(&self) -> usize {
        self.socket.disabled.len() + self.request.disabled.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_plan_gates_everything_but_four_ops() {
        let plan = GatePlan::compute(&Allowlists::builtin());
        assert_eq!(plan.socket.disabled.len(), 25);
        assert_eq!(plan.request.disabled.len(), 67);
        assert_eq!(plan.gated_total(), 92);
        assert!(plan.socket.is_complete() && plan.request.is_complete());
    }
}
