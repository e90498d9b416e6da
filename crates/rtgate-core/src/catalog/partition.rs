//! Enabled/disabled split of one catalog.

use std::collections::BTreeSet;

use super::Operation;

/// Remove the first occurrence of `value`, swapping the last element into its
/// slot. Order is not preserved. Returns `false` (and leaves `items` untouched)
/// when `value` is absent.
pub fn remove_value<T: PartialEq>(items: &mut Vec<T>, value: &T) -> bool {
    match items.iter().position(|v| v == value) {
        Some(i) => {
            items.swap_remove(i);
            true
        }
        None => false,
    }
}

/// Classification of every catalog member as enabled or disabled.
///
/// Derived from `O::ALL` and an allow-list; recomputed on each install and not
/// retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<O: Operation> {
    pub enabled: Vec<O>,
    pub disabled: Vec<O>,
}

impl<O: Operation> Partition<O> {
    /// `disabled = O::ALL \ allow`. Both halves are returned in index order.
    pub fn compute(allow: &BTreeSet<O>) -> Self {
        let mut disabled = O::ALL.to_vec();
        for op in allow {
            remove_value(&mut disabled, op);
        }
        disabled.sort();

        let enabled: Vec<O> = O::ALL.iter().copied().filter(|op| allow.contains(op)).collect();

        Self { enabled, disabled }
    }

    pub fn is_disabled(&self, op: O) -> bool {
        self.disabled.contains(&op)
    }

    /// Every catalog member appears in exactly one half.
    pub fn is_complete(&self) -> bool {
        if self.enabled.len() + self.disabled.len() != O::ALL.len() {
            return false;
        }
        O::ALL
            .iter()
            .all(|op| self.enabled.contains(op) != self.disabled.contains(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RequestOp, SocketOp};

    #[test]
    fn removing_absent_value_is_noop() {
        let mut v = vec![1, 2, 3];
        assert!(!remove_value(&mut v, &9));
        assert_eq!(v, vec![1, 2, 3]);

        assert!(remove_value(&mut v, &1));
        assert_eq!(v, vec![3, 2]);
    }

    #[test]
    fn socket_partition_with_match_ops_enabled() {
        let allow: BTreeSet<SocketOp> =
            [SocketOp::MatchJoin, SocketOp::MatchCreate, SocketOp::MatchLeave].into();
        let p = Partition::compute(&allow);

        assert_eq!(p.disabled.len(), 25);
        assert_eq!(p.enabled, vec![SocketOp::MatchCreate, SocketOp::MatchJoin, SocketOp::MatchLeave]);
        for op in &allow {
            assert!(!p.is_disabled(*op));
        }
        assert!(p.is_complete());
    }

    #[test]
    fn request_partition_with_single_op_enabled() {
        let allow: BTreeSet<RequestOp> = [RequestOp::AuthenticateEmail].into();
        let p = Partition::compute(&allow);

        assert_eq!(p.disabled.len(), 67);
        assert!(p.is_disabled(RequestOp::CreateGroup));
        assert!(!p.is_disabled(RequestOp::AuthenticateEmail));
        assert!(p.is_complete());
    }

    #[test]
    fn empty_allowlist_disables_everything() {
        let p = Partition::<RequestOp>::compute(&BTreeSet::new());
        assert_eq!(p.disabled, RequestOp::ALL.to_vec());
        assert!(p.enabled.is_empty());
    }

    #[test]
    fn compute_is_pure() {
        let allow: BTreeSet<SocketOp> = [SocketOp::Ping, SocketOp::Pong].into();
        assert_eq!(Partition::compute(&allow), Partition::compute(&allow));
    }

    #[test]
    fn disabled_half_is_index_ordered() {
        let allow: BTreeSet<SocketOp> = [SocketOp::ChannelJoin].into();
        let p = Partition::compute(&allow);
        let idx: Vec<u16> = p.disabled.iter().map(|op| op.index()).collect();
        let mut sorted = idx.clone();
        sorted.sort_unstable();
        assert_eq!(idx, sorted);
    }
}
