#[cfg(test)]
mod tests {
    use glam::DVec3;

    use crate::enums::*;
    use crate::events::{LogRecord, ParseRecordError, SimEvent};
    use crate::state::{AgentView, FactionCounts, PopulationSnapshot};
    use crate::types::{Position, SimTime};
    use crate::vector;

    // ---- Log format ----

    #[test]
    fn test_header_lines() {
        let title = LogRecord::new(
            0,
            SimEvent::Title {
                title: "Simple Spaceship Simulation".into(),
            },
        );
        assert_eq!(title.to_string(), "0, Title, Simple Spaceship Simulation");

        let scene = LogRecord::new(0, SimEvent::Scene { x: 0, y: 0, z: 1280 });
        assert_eq!(scene.to_string(), "0, Scene, 0, 0, 1280");

        let agent = LogRecord::new(
            0,
            SimEvent::Agent {
                id: 7,
                faction: Faction::Green,
            },
        );
        assert_eq!(agent.to_string(), "0, Agent, 7, 1");
    }

    #[test]
    fn test_position_line_field_order() {
        let record = LogRecord::new(
            12,
            SimEvent::Position {
                id: 3,
                position: DVec3::new(1.5, -2.0, 300.0),
                velocity: DVec3::new(0.25, 0.0, -0.5),
                force: DVec3::new(0.0, 0.125, 0.0),
            },
        );
        assert_eq!(
            record.to_string(),
            "12, Position, 3, 1.5, -2.0, 300.0, 0.25, 0.0, -0.5, 0.0, 0.125, 0.0"
        );
    }

    #[test]
    fn test_combat_lines() {
        let shot = LogRecord::new(
            40,
            SimEvent::Shot {
                shooter: 1,
                target: 2,
            },
        );
        assert_eq!(shot.to_string(), "40, Shot, 1, 2");

        let boom = LogRecord::new(41, SimEvent::Explosion { id: 2 });
        assert_eq!(boom.to_string(), "41, Explosion, 2");
    }

    #[test]
    fn test_parse_reads_back_every_kind() {
        let records = vec![
            LogRecord::new(0, SimEvent::Title { title: "t".into() }),
            LogRecord::new(0, SimEvent::Scene { x: 0, y: 0, z: 1280 }),
            LogRecord::new(
                0,
                SimEvent::Agent {
                    id: 0,
                    faction: Faction::Red,
                },
            ),
            LogRecord::new(
                5,
                SimEvent::Position {
                    id: 0,
                    position: DVec3::new(-812.3333333333334, 1e-7, 250.0),
                    velocity: DVec3::new(0.1, 0.2, 0.30000000000000004),
                    force: DVec3::ZERO,
                },
            ),
            LogRecord::new(
                9,
                SimEvent::Shot {
                    shooter: 4,
                    target: 5,
                },
            ),
            LogRecord::new(9, SimEvent::Explosion { id: 5 }),
        ];
        for record in records {
            let line = record.to_string();
            let parsed: LogRecord = line.parse().unwrap();
            assert_eq!(parsed, record, "line {line:?} did not read back");
        }
    }

    #[test]
    fn test_parse_tolerates_loose_spacing() {
        // Header fields may be padded with spaces on both sides.
        let parsed: LogRecord = "0 , Scene , 0 , 0 , 1280".parse().unwrap();
        assert_eq!(parsed.event, SimEvent::Scene { x: 0, y: 0, z: 1280 });
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LogRecord>(), Err(ParseRecordError::Empty));
        assert!(matches!(
            "1, Laser, 3".parse::<LogRecord>(),
            Err(ParseRecordError::UnknownKind(_))
        ));
        assert!(matches!(
            "1, Shot, 3".parse::<LogRecord>(),
            Err(ParseRecordError::FieldCount {
                kind: "Shot",
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            "1, Agent, 3, 2".parse::<LogRecord>(),
            Err(ParseRecordError::InvalidField(_))
        ));
        assert!(matches!(
            "x, Explosion, 3".parse::<LogRecord>(),
            Err(ParseRecordError::InvalidField(_))
        ));
    }

    // ---- Vector helpers ----

    #[test]
    fn test_unit_or_zero_guards_zero_length() {
        assert_eq!(vector::unit_or_zero(DVec3::ZERO), DVec3::ZERO);
        let u = vector::unit_or_zero(DVec3::new(3.0, 0.0, 4.0));
        assert!((u.length() - 1.0).abs() < 1e-12);
        assert!((u.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_direction_between_coincident_points_is_zero() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(vector::direction(p, p), DVec3::ZERO);
        let d = vector::direction(DVec3::ZERO, DVec3::new(0.0, 0.0, -9.0));
        assert_eq!(d, DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_clamp_magnitude_is_uniform() {
        let v = DVec3::new(30.0, 40.0, 0.0);
        let clamped = vector::clamp_magnitude(v, 5.0);
        assert!((clamped.length() - 5.0).abs() < 1e-12);
        // Direction preserved, not clipped per axis.
        assert!((clamped.x / clamped.y - 0.75).abs() < 1e-12);

        let short = DVec3::new(0.1, 0.2, 0.3);
        assert_eq!(vector::clamp_magnitude(short, 5.0), short);
    }

    #[test]
    fn test_is_finite() {
        assert!(vector::is_finite(DVec3::ONE));
        assert!(!vector::is_finite(DVec3::new(f64::NAN, 0.0, 0.0)));
        assert!(!vector::is_finite(DVec3::new(0.0, f64::INFINITY, 0.0)));
    }

    // ---- Types ----

    #[test]
    fn test_position_distances() {
        let a = Position(DVec3::ZERO);
        let b = Position(DVec3::new(3.0, 4.0, 12.0));
        assert_eq!(a.distance_sq_to(&b), 169.0);
        assert_eq!(b.distance_sq_to(&a), 169.0);
    }

    #[test]
    fn test_sim_time_schedule() {
        let mut time = SimTime::default();
        assert!(time.is_every(10));
        assert!(time.is_every(100));
        time.advance(0.2);
        assert_eq!(time.tick, 1);
        assert!((time.elapsed - 0.2).abs() < 1e-12);
        assert!(!time.is_every(10));
        assert!(!time.is_every(0));
        for _ in 0..9 {
            time.advance(0.2);
        }
        assert!(time.is_every(10));
        assert!(!time.is_every(100));
    }

    #[test]
    fn test_faction_alternates_and_opposes() {
        assert_eq!(Faction::alternating(0), Faction::Red);
        assert_eq!(Faction::alternating(1), Faction::Green);
        assert_eq!(Faction::alternating(2), Faction::Red);
        assert_eq!(Faction::Red.code(), 0);
        assert_eq!(Faction::Green.code(), 1);
        assert!(Faction::Red.is_hostile_to(Faction::Green));
        assert!(!Faction::Green.is_hostile_to(Faction::Green));
    }

    // ---- Snapshots ----

    #[test]
    fn test_snapshot_serializes() {
        let view = AgentView {
            id: 4,
            faction: Faction::Green,
            position: DVec3::new(1.0, 2.0, 3.0),
            velocity: DVec3::ZERO,
            force: DVec3::ZERO,
            energy: 99.5,
            alive: true,
            state: AgentState::Targeting,
            target: Some(3),
            targeted_by: 2,
            neighbor_count: 5,
            neighbors_refreshed_at: Some(10),
        };
        let snapshot = PopulationSnapshot {
            time: SimTime::default(),
            agents: vec![view.clone()],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PopulationSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.agents, vec![view]);
        assert_eq!(back.alive_count(), 1);
        assert!(back.get(4).is_some());
        assert!(back.get(5).is_none());
    }

    #[test]
    fn test_faction_counts() {
        let mut counts = FactionCounts::default();
        counts.add(Faction::Red);
        counts.add(Faction::Red);
        counts.add(Faction::Green);
        assert_eq!(counts.red, 2);
        assert_eq!(counts.green, 1);
        assert_eq!(counts.total(), 3);
    }
}
