//! Editing steps given on the command line, and replaying them against an
//! [EditorSession].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use flow::{DropError, EditorSession, GraphError, NodeId, palette};
use thiserror::Error;

/// Canvas x coordinate used when a drop step doesn't give one.
const DEFAULT_DROP_X: f32 = 500.0;

/// One editor gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Drop a palette component at canvas x coordinate `x`.
    Drop { kind: String, x: f32 },
    /// Drag a connection from `source` to `target`.
    Connect { source: NodeId, target: NodeId },
    /// Add a node or edge (ids containing `->`) to the selection.
    Select { id: String },
    /// Delete the selection.
    Delete,
    /// Edit a node's label.
    Rename { id: NodeId, label: String },
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StepParseError(s.to_string());
        let (verb, rest) = s.split_once(':').unwrap_or((s, ""));

        let step = match verb {
            "drop" => {
                let (kind, x) = match rest.split_once('@') {
                    Some((kind, x)) => (kind, x.parse().map_err(|_| invalid())?),
                    None => (rest, DEFAULT_DROP_X),
                };
                Step::Drop {
                    kind: kind.to_string(),
                    x,
                }
            }
            "connect" => {
                let (source, target) = rest.split_once(':').ok_or_else(invalid)?;
                Step::Connect {
                    source: source.to_string(),
                    target: target.to_string(),
                }
            }
            "select" => Step::Select {
                id: rest.to_string(),
            },
            "delete" if rest.is_empty() && !s.ends_with(':') => Step::Delete,
            "rename" => {
                let (id, label) = rest.split_once(':').ok_or_else(invalid)?;
                Step::Rename {
                    id: id.to_string(),
                    label: label.to_string(),
                }
            }
            _ => return Err(invalid()),
        };

        let missing_id = match &step {
            Step::Drop { kind, .. } => kind.is_empty(),
            Step::Connect { source, target } => source.is_empty() || target.is_empty(),
            Step::Select { id } | Step::Rename { id, .. } => id.is_empty(),
            Step::Delete => false,
        };
        if missing_id {
            return Err(invalid());
        }

        Ok(step)
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Step::Drop { kind, x } => write!(f, "drop:{kind}@{x}"),
            Step::Connect { source, target } => write!(f, "connect:{source}:{target}"),
            Step::Select { id } => write!(f, "select:{id}"),
            Step::Delete => f.write_str("delete"),
            Step::Rename { id, label } => write!(f, "rename:{id}:{label}"),
        }
    }
}

/// Indicates that a command-line argument isn't a valid [Step].
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("Invalid step `{0}`")]
pub struct StepParseError(pub String);

/// Why a step couldn't be applied.
#[derive(Error, Debug)]
pub enum StepError {
    #[error(transparent)]
    Drop(#[from] DropError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl Step {
    /// Apply this step to `session`.
    pub fn apply(&self, session: &mut EditorSession) -> Result<(), StepError> {
        match self {
            Step::Drop { kind, x } => {
                let item =
                    palette::find(kind).ok_or_else(|| DropError::UnknownKind(kind.clone()))?;
                session.drop_component(&item.drag_payload().to_json()?, *x)?;
            }
            Step::Connect { source, target } => {
                session.connect(source, target)?;
            }
            Step::Select { id } if id.contains("->") => session.select_edge(id)?,
            Step::Select { id } => session.select_node(id)?,
            Step::Delete => {
                session.delete_selected();
            }
            Step::Rename { id, label } => session.rename_node(id, label.as_str())?,
        }
        Ok(())
    }
}

/// Apply `steps` to a new session in order, stopping at the first step that
/// fails. The error carries the step's position (starting at 1).
pub fn replay(steps: &[Step]) -> Result<EditorSession, (usize, StepError)> {
    let mut session = EditorSession::new();

    for (idx, step) in steps.iter().enumerate() {
        util::debug_log_info!("Applying step {}: {step}", idx + 1);
        step.apply(&mut session).map_err(|e| (idx + 1, e))?;
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(args: &[&str]) -> Vec<Step> {
        args.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!(
            "drop:SAP@120.5".parse(),
            Ok(Step::Drop {
                kind: "SAP".to_string(),
                x: 120.5,
            })
        );
        assert_eq!(
            "drop:cron".parse(),
            Ok(Step::Drop {
                kind: "cron".to_string(),
                x: DEFAULT_DROP_X,
            })
        );
        assert_eq!(
            "connect:start:SAP-3".parse(),
            Ok(Step::Connect {
                source: "start".to_string(),
                target: "SAP-3".to_string(),
            })
        );
        assert_eq!("delete".parse(), Ok(Step::Delete));
        assert_eq!(
            "rename:SAP-3:Orders: EU".parse(),
            Ok(Step::Rename {
                id: "SAP-3".to_string(),
                label: "Orders: EU".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_invalid_steps() {
        for arg in [
            "",
            "drop",
            "drop:",
            "drop:SAP@left",
            "connect:start",
            "connect::end",
            "select:",
            "delete:",
            "delete:all",
            "rename:SAP-3",
            "move:SAP-3",
        ] {
            assert_eq!(
                arg.parse::<Step>(),
                Err(StepParseError(arg.to_string())),
                "{arg}"
            );
        }
    }

    #[test]
    fn test_display_parses_back() {
        for arg in ["drop:lookup@300", "connect:a-1:b-2", "select:a-1->b-2", "delete"] {
            let step: Step = arg.parse().unwrap();
            assert_eq!(step.to_string(), arg);
        }
    }

    #[test]
    fn test_replay_pipeline() {
        let session = replay(&steps(&[
            "drop:SAP@300",
            "drop:lookup@600",
            "connect:start:SAP-3",
            "connect:SAP-3:lookup-4",
            "connect:lookup-4:end",
            "rename:lookup-4:Match accounts",
        ]))
        .unwrap();

        assert_eq!(session.graph().nodes().len(), 4);
        assert_eq!(session.graph().edges().len(), 3);
        assert_eq!(
            session.graph().node("lookup-4").unwrap().label,
            "Match accounts"
        );
    }

    #[test]
    fn test_replay_select_and_delete() {
        let session = replay(&steps(&[
            "drop:SAP@300",
            "drop:lookup@600",
            "connect:SAP-3:lookup-4",
            "select:SAP-3->lookup-4",
            "select:start",
            "delete",
        ]))
        .unwrap();

        assert_eq!(session.graph().nodes().len(), 4);
        assert!(session.graph().edges().is_empty());
    }

    #[test]
    fn test_replay_stops_at_refused_connection() {
        let result = replay(&steps(&["drop:cron", "connect:start:cron-3", "delete"]));

        let Err((position, error)) = result else {
            panic!("expected the connection to be refused");
        };
        assert_eq!(position, 2);
        assert!(matches!(
            error,
            StepError::Graph(GraphError::InvalidConnection { .. })
        ));
    }

    #[test]
    fn test_replay_unknown_kind() {
        let result = replay(&steps(&["drop:workflow"]));

        assert!(matches!(
            result,
            Err((1, StepError::Drop(DropError::UnknownKind(_))))
        ));
    }
}
