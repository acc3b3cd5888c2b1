//! Replay log records.
//!
//! Every line of the event log is `tick, Kind, fields...` with fields
//! separated by `", "`. The external viewer depends on field order and
//! presence, so `Display` and `FromStr` are the wire format.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Faction;

/// A single simulation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Run title, once at time 0.
    Title { title: String },
    /// Viewport hint for the viewer, once at time 0.
    Scene { x: i32, y: i32, z: i32 },
    /// Agent creation.
    Agent { id: u32, faction: Faction },
    /// Post-move kinematic state, once per live agent per step.
    Position {
        id: u32,
        position: DVec3,
        velocity: DVec3,
        force: DVec3,
    },
    /// An attack fired.
    Shot { shooter: u32, target: u32 },
    /// Agent energy crossed below zero.
    Explosion { id: u32 },
}

impl SimEvent {
    /// Kind tag as written in the second column.
    pub fn kind(&self) -> &'static str {
        match self {
            SimEvent::Title { .. } => "Title",
            SimEvent::Scene { .. } => "Scene",
            SimEvent::Agent { .. } => "Agent",
            SimEvent::Position { .. } => "Position",
            SimEvent::Shot { .. } => "Shot",
            SimEvent::Explosion { .. } => "Explosion",
        }
    }
}

/// An event stamped with the tick it happened on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub tick: u64,
    pub event: SimEvent,
}

impl LogRecord {
    pub fn new(tick: u64, event: SimEvent) -> Self {
        Self { tick, event }
    }
}

fn write_vec(f: &mut fmt::Formatter<'_>, v: DVec3) -> fmt::Result {
    write!(f, ", {:?}, {:?}, {:?}", v.x, v.y, v.z)
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.tick, self.event.kind())?;
        match &self.event {
            SimEvent::Title { title } => write!(f, ", {title}"),
            SimEvent::Scene { x, y, z } => write!(f, ", {x}, {y}, {z}"),
            SimEvent::Agent { id, faction } => write!(f, ", {id}, {}", faction.code()),
            SimEvent::Position {
                id,
                position,
                velocity,
                force,
            } => {
                write!(f, ", {id}")?;
                write_vec(f, *position)?;
                write_vec(f, *velocity)?;
                write_vec(f, *force)
            }
            SimEvent::Shot { shooter, target } => write!(f, ", {shooter}, {target}"),
            SimEvent::Explosion { id } => write!(f, ", {id}"),
        }
    }
}

/// Failure to parse a log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRecordError {
    #[error("empty line")]
    Empty,
    #[error("unknown event kind: {0}")]
    UnknownKind(String),
    #[error("{kind} expects {expected} fields, found {found}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid field {0:?}")]
    InvalidField(String),
}

fn field<T: FromStr>(raw: &str) -> Result<T, ParseRecordError> {
    raw.parse()
        .map_err(|_| ParseRecordError::InvalidField(raw.to_string()))
}

fn expect_fields(
    kind: &'static str,
    fields: &[&str],
    expected: usize,
) -> Result<(), ParseRecordError> {
    if fields.len() != expected {
        return Err(ParseRecordError::FieldCount {
            kind,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn vec_at(fields: &[&str], start: usize) -> Result<DVec3, ParseRecordError> {
    Ok(DVec3::new(
        field(fields[start])?,
        field(fields[start + 1])?,
        field(fields[start + 2])?,
    ))
}

impl FromStr for LogRecord {
    type Err = ParseRecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseRecordError::Empty);
        }
        let items: Vec<&str> = line.split(',').map(str::trim).collect();
        if items.len() < 2 {
            return Err(ParseRecordError::Empty);
        }
        let tick: u64 = field(items[0])?;
        let fields = &items[2..];

        let event = match items[1] {
            "Title" => SimEvent::Title {
                // Titles may contain commas; rejoin whatever follows the kind.
                title: fields.join(", "),
            },
            "Scene" => {
                expect_fields("Scene", fields, 3)?;
                SimEvent::Scene {
                    x: field(fields[0])?,
                    y: field(fields[1])?,
                    z: field(fields[2])?,
                }
            }
            "Agent" => {
                expect_fields("Agent", fields, 2)?;
                let faction = match field::<u8>(fields[1])? {
                    0 => Faction::Red,
                    1 => Faction::Green,
                    _ => return Err(ParseRecordError::InvalidField(fields[1].to_string())),
                };
                SimEvent::Agent {
                    id: field(fields[0])?,
                    faction,
                }
            }
            "Position" => {
                expect_fields("Position", fields, 10)?;
                SimEvent::Position {
                    id: field(fields[0])?,
                    position: vec_at(fields, 1)?,
                    velocity: vec_at(fields, 4)?,
                    force: vec_at(fields, 7)?,
                }
            }
            "Shot" => {
                expect_fields("Shot", fields, 2)?;
                SimEvent::Shot {
                    shooter: field(fields[0])?,
                    target: field(fields[1])?,
                }
            }
            "Explosion" => {
                expect_fields("Explosion", fields, 1)?;
                SimEvent::Explosion {
                    id: field(fields[0])?,
                }
            }
            other => return Err(ParseRecordError::UnknownKind(other.to_string())),
        };

        Ok(LogRecord { tick, event })
    }
}
