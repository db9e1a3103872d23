#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{TimesheetDetail, TimesheetEntry, TimesheetId, TimesheetSummary};
    use serde_json::{json, Value};

    pub fn summary(id: &str, name: &str, period: &str) -> TimesheetSummary {
        TimesheetSummary {
            id: TimesheetId::from(id),
            created_by_full_name: name.into(),
            period: period.into(),
            status: Some("submitted".into()),
            total_hours: Some(40.0),
            submitted_at: None,
        }
    }

    pub fn summary_json(id: &str, name: &str, period: &str) -> Value {
        json!({
            "id": id,
            "created_by_full_name": name,
            "period": period,
            "status": "submitted",
            "total_hours": 40.0
        })
    }

    fn entry(date: &str, project: &str, hours: f64) -> TimesheetEntry {
        TimesheetEntry {
            date: date.into(),
            project: Some(project.into()),
            task: Some("Development".into()),
            hours,
            notes: None,
        }
    }

    pub fn detail(id: &str) -> TimesheetDetail {
        TimesheetDetail {
            id: TimesheetId::from(id),
            created_by_full_name: "Jane Doe".into(),
            period: "2025-01-06 - 2025-01-12".into(),
            status: Some("submitted".into()),
            entries: vec![
                entry("2025-01-06", "Apollo", 8.0),
                entry("2025-01-07", "Apollo", 7.5),
            ],
            total_hours: None,
            rejection_reason: None,
        }
    }

    pub fn detail_json(id: &str) -> Value {
        json!({
            "id": id,
            "created_by_full_name": "Jane Doe",
            "period": "2025-01-06 - 2025-01-12",
            "status": "submitted",
            "entries": [
                { "date": "2025-01-06", "project": "Apollo", "task": "Development", "hours": 8.0 },
                { "date": "2025-01-07", "project": "Apollo", "task": "Development", "hours": "7.5" }
            ]
        })
    }
}
