//! Connection rules between node categories.
//!
//! The rules are a pure function of the two endpoint categories. Hosts that
//! only know node ids go through [is_valid_connection] with something that
//! implements [CategoryLookup] (usually [crate::FlowGraph]).

use thiserror::Error;

use crate::category::NodeCategory::{self, Connector, End, Job, Start, Transformation};

/// Resolves a node id to the category of that node.
#[cfg_attr(test, mockall::automock)]
pub trait CategoryLookup {
    /// The category of node `id`, or [None] if no such node exists.
    fn category_of(&self, id: &str) -> Option<NodeCategory>;
}

/// The rule a rejected category pair broke.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionRule {
    #[error("Nothing can connect into the start node or out of the end node")]
    FixedEndpointDirection,

    #[error("The start node can only connect to connectors or transformations")]
    StartTarget,

    #[error("The end node can only receive connections from connectors or transformations")]
    EndSource,

    #[error("Jobs cannot connect to anything")]
    JobEndpoint,

    #[error("Connectors can only connect to transformations")]
    ConnectorTarget,

    #[error("Transformations can only connect to connectors or the end node")]
    TransformationTarget,
}

/// Decide whether an edge from a `source` node to a `target` node is allowed,
/// returning the first rule that rejects it otherwise.
///
/// Rules are checked in order and the first match decides. The accepted pairs
/// are exactly `start → connector`, `start → transformation`,
/// `connector → transformation`, `transformation → connector` and
/// `transformation → end`.
pub fn check_category_pair(
    source: NodeCategory,
    target: NodeCategory,
) -> Result<(), ConnectionRule> {
    // The start node has no input handle and the end node no output handle.
    if source == End || target == Start {
        return Err(ConnectionRule::FixedEndpointDirection);
    }

    if source == Start && !matches!(target, Connector | Transformation) {
        return Err(ConnectionRule::StartTarget);
    }

    if target == End && !matches!(source, Connector | Transformation) {
        return Err(ConnectionRule::EndSource);
    }

    if source == Job || target == Job {
        return Err(ConnectionRule::JobEndpoint);
    }

    if source == Connector && target != Transformation {
        return Err(ConnectionRule::ConnectorTarget);
    }

    if source == Transformation && !matches!(target, Connector | End) {
        return Err(ConnectionRule::TransformationTarget);
    }

    Ok(())
}

/// Whether an edge from a `source` node to a `target` node is allowed.
#[inline]
pub fn is_valid_category_pair(source: NodeCategory, target: NodeCategory) -> bool {
    check_category_pair(source, target).is_ok()
}

/// Whether an edge from node `source_id` to node `target_id` is allowed.
///
/// Ids that don't resolve to a node make the connection invalid.
pub fn is_valid_connection(
    lookup: &impl CategoryLookup,
    source_id: &str,
    target_id: &str,
) -> bool {
    let (Some(source), Some(target)) =
        (lookup.category_of(source_id), lookup.category_of(target_id))
    else {
        return false;
    };

    is_valid_category_pair(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The 25 pairs and their expected outcome, row by row.
    const TABLE: [(NodeCategory, NodeCategory, Result<(), ConnectionRule>); 25] = {
        use ConnectionRule::*;
        [
            (Start, Start, Err(FixedEndpointDirection)),
            (Start, End, Err(StartTarget)),
            (Start, Connector, Ok(())),
            (Start, Transformation, Ok(())),
            (Start, Job, Err(StartTarget)),
            (End, Start, Err(FixedEndpointDirection)),
            (End, End, Err(FixedEndpointDirection)),
            (End, Connector, Err(FixedEndpointDirection)),
            (End, Transformation, Err(FixedEndpointDirection)),
            (End, Job, Err(FixedEndpointDirection)),
            (Connector, Start, Err(FixedEndpointDirection)),
            (Connector, End, Err(ConnectorTarget)),
            (Connector, Connector, Err(ConnectorTarget)),
            (Connector, Transformation, Ok(())),
            (Connector, Job, Err(JobEndpoint)),
            (Transformation, Start, Err(FixedEndpointDirection)),
            (Transformation, End, Ok(())),
            (Transformation, Connector, Ok(())),
            (Transformation, Transformation, Err(TransformationTarget)),
            (Transformation, Job, Err(JobEndpoint)),
            (Job, Start, Err(FixedEndpointDirection)),
            (Job, End, Err(EndSource)),
            (Job, Connector, Err(JobEndpoint)),
            (Job, Transformation, Err(JobEndpoint)),
            (Job, Job, Err(JobEndpoint)),
        ]
    };

    #[test]
    fn test_every_category_pair() {
        for (source, target, expected) in TABLE {
            assert_eq!(
                check_category_pair(source, target),
                expected,
                "{source} -> {target}"
            );
            assert_eq!(
                is_valid_category_pair(source, target),
                expected.is_ok(),
                "{source} -> {target}"
            );
        }
    }

    #[test]
    fn test_table_covers_every_pair_once() {
        for source in NodeCategory::ALL {
            for target in NodeCategory::ALL {
                let rows = TABLE
                    .iter()
                    .filter(|(s, t, _)| *s == source && *t == target)
                    .count();
                assert_eq!(rows, 1, "{source} -> {target}");
            }
        }
    }

    #[test]
    fn test_accepted_pairs() {
        let accepted: Vec<_> = NodeCategory::ALL
            .into_iter()
            .flat_map(|s| NodeCategory::ALL.into_iter().map(move |t| (s, t)))
            .filter(|&(s, t)| is_valid_category_pair(s, t))
            .collect();

        assert_eq!(
            accepted,
            vec![
                (Start, Connector),
                (Start, Transformation),
                (Connector, Transformation),
                (Transformation, End),
                (Transformation, Connector),
            ]
        );
    }

    #[test]
    fn test_scenarios() {
        assert!(is_valid_category_pair(Start, Connector));
        assert!(!is_valid_category_pair(Start, Job));
        assert!(is_valid_category_pair(Connector, Transformation));
        assert!(!is_valid_category_pair(Connector, Connector));
        assert!(is_valid_category_pair(Transformation, End));
        assert!(!is_valid_category_pair(Job, Transformation));
    }

    #[test]
    fn test_same_category_pairs_are_rejected() {
        for category in NodeCategory::ALL {
            assert!(!is_valid_category_pair(category, category), "{category}");
        }
    }

    #[test]
    fn test_repeated_calls_agree() {
        for (source, target, _) in TABLE {
            let first = check_category_pair(source, target);
            let second = check_category_pair(source, target);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_connection_resolves_both_ids() {
        let mut lookup = MockCategoryLookup::new();
        lookup
            .expect_category_of()
            .times(2)
            .returning(|id| match id {
                "start" => Some(Start),
                "SAP-3" => Some(Connector),
                _ => None,
            });

        assert!(is_valid_connection(&lookup, "start", "SAP-3"));
    }

    #[test]
    fn test_connection_uses_resolved_categories_in_order() {
        let mut lookup = MockCategoryLookup::new();
        lookup
            .expect_category_of()
            .times(2)
            .returning(|id| match id {
                "start" => Some(Start),
                "SAP-3" => Some(Connector),
                _ => None,
            });

        assert!(!is_valid_connection(&lookup, "SAP-3", "start"));
    }

    #[test]
    fn test_unknown_source_is_invalid() {
        let mut lookup = MockCategoryLookup::new();
        lookup
            .expect_category_of()
            .returning(|id| (id == "lookup-3").then_some(Transformation));

        assert!(!is_valid_connection(&lookup, "ghost", "lookup-3"));
    }

    #[test]
    fn test_unknown_target_is_invalid() {
        let mut lookup = MockCategoryLookup::new();
        lookup
            .expect_category_of()
            .returning(|id| (id == "start").then_some(Start));

        assert!(!is_valid_connection(&lookup, "start", "ghost"));
        assert!(!is_valid_connection(&lookup, "ghost", "ghost"));
    }
}
