//! Roster resolution: the multi-table join that reconstructs a participant's
//! identity and affiliation, flattened into the [`CardRecord`] projection the
//! ID-card layer consumes.

pub mod affiliation;
pub mod format;

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

pub use affiliation::Affiliation;
pub use format::{format_event_date, full_name};

/// Raw row shape returned by [`ROSTER_QUERY`]. Affiliation columns come back
/// unresolved; the dual-path fallback happens in [`CardRecord::from_row`].
#[derive(Debug, FromRow)]
struct RosterRow {
    id: String,
    f_name: Option<String>,
    m_name: Option<String>,
    l_name: Option<String>,
    suffix: Option<String>,
    phone_number: Option<String>,
    position: Option<String>,
    participant_type: Option<String>,
    participant_image_url: Option<String>,
    event_name: String,
    event_description: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    school_name: Option<String>,
    district_name: Option<String>,
    school_division: Option<String>,
    office_id: Option<i32>,
    section_name: Option<String>,
    functional_division_name: Option<String>,
    office_division: Option<String>,
}

/// The flattened, display-ready projection of one registration.
///
/// Constructed fresh on every roster fetch and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CardRecord {
    pub id: String,
    pub full_name: String,
    /// First name shown large on the card; "N/A" when missing.
    pub name: String,
    pub position: Option<String>,
    pub participant_type: String,
    pub phone_number: Option<String>,
    pub participant_image_url: String,
    pub school: Option<String>,
    pub office: Option<String>,
    pub district_name: Option<String>,
    pub division_name: Option<String>,
    pub event_name: String,
    pub event_description: Option<String>,
    pub formatted_event_date: String,
}

impl CardRecord {
    fn from_row(row: RosterRow) -> Self {
        let affiliation = Affiliation::resolve(
            row.school_name,
            row.district_name,
            row.school_division,
            row.office_id,
            row.section_name,
            row.functional_division_name,
            row.office_division,
        );

        CardRecord {
            full_name: full_name(
                row.f_name.as_deref(),
                row.m_name.as_deref(),
                row.l_name.as_deref(),
                row.suffix.as_deref(),
            ),
            name: row.f_name.unwrap_or_else(|| "N/A".to_string()),
            position: row.position,
            participant_type: row.participant_type.unwrap_or_else(|| "N/A".to_string()),
            phone_number: row.phone_number,
            participant_image_url: row.participant_image_url.unwrap_or_default(),
            school: affiliation.school().map(str::to_owned),
            office: affiliation.office().map(str::to_owned),
            district_name: affiliation.district_name().map(str::to_owned),
            division_name: affiliation.division_name().map(str::to_owned),
            event_name: row.event_name,
            event_description: row.event_description,
            formatted_event_date: format_event_date(row.start_date, row.end_date),
            id: row.id,
        }
    }
}

/// Registrations joined against their event and both affiliation paths.
///
/// The inner join drops registrations without an event; every affiliation
/// table is left-joined so a missing path surfaces as NULL columns rather
/// than a missing row. The office-path and school-path divisions are aliased
/// separately to keep the two references unambiguous.
const ROSTER_QUERY: &str = r#"
    SELECT
        r.id,
        r.f_name,
        r.m_name,
        r.l_name,
        r.suffix,
        r.phone_number,
        r.position,
        r.participant_type,
        r.participant_image_url,
        e.name AS event_name,
        e.description AS event_description,
        e.start_date,
        e.end_date,
        s.name AS school_name,
        d.district_name,
        school_div.division_name AS school_division,
        o.id AS office_id,
        sec.name AS section_name,
        fd.name AS functional_division_name,
        office_div.division_name AS office_division
    FROM rael.registration r
    INNER JOIN rael.events e
        ON r.event_id = e.id
    LEFT JOIN rael.office o
        ON r.office_id = o.id
    LEFT JOIN rael.functional_division fd
        ON o.functional_division_id = fd.id
    LEFT JOIN rael.section sec
        ON o.section_id = sec.id
    LEFT JOIN rael.schools s
        ON r.school_id = s.school_id
    LEFT JOIN rael.district d
        ON s.district_id = d.id
    LEFT JOIN rael.divisions school_div
        ON d.division_id = school_div.id
    LEFT JOIN rael.divisions office_div
        ON o.division_id = office_div.id
    ORDER BY r.id
"#;

/// Fetches the complete resolved roster in one read-only statement.
///
/// All-or-nothing: a query failure surfaces as an error with no partial
/// result. Pagination is a presentation concern handled by the card layer.
pub async fn fetch_roster(pool: &PgPool) -> Result<Vec<CardRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RosterRow>(ROSTER_QUERY)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(CardRecord::from_row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> RosterRow {
        RosterRow {
            id: "RAEL-2025-0001".into(),
            f_name: Some("Maria".into()),
            m_name: Some("Cristina".into()),
            l_name: Some("Dela Cruz".into()),
            suffix: None,
            phone_number: Some("09171234567".into()),
            position: Some("School Head".into()),
            participant_type: Some("Delegate".into()),
            participant_image_url: Some("https://storage.example/p/0001.png".into()),
            event_name: "Leadership Summit".into(),
            event_description: Some("Annual assembly".into()),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            school_name: Some("Daet Elementary School".into()),
            district_name: Some("Daet North".into()),
            school_division: Some("Camarines Norte".into()),
            office_id: None,
            section_name: None,
            functional_division_name: None,
            office_division: None,
        }
    }

    #[test]
    fn record_flattens_school_path() {
        let record = CardRecord::from_row(sample_row());
        assert_eq!(record.full_name, "Maria C. Dela Cruz");
        assert_eq!(record.school.as_deref(), Some("Daet Elementary School"));
        assert_eq!(record.office, None);
        assert_eq!(record.division_name.as_deref(), Some("Camarines Norte"));
        assert_eq!(record.district_name.as_deref(), Some("Daet North"));
        assert_eq!(record.formatted_event_date, "March 10-15, 2025");
    }

    #[test]
    fn record_flattens_office_path() {
        let mut row = sample_row();
        row.school_name = None;
        row.district_name = None;
        row.school_division = None;
        row.office_id = Some(3);
        row.section_name = Some("Records Section".into());
        row.functional_division_name = Some("Administration".into());
        row.office_division = Some("Regional Office".into());

        let record = CardRecord::from_row(row);
        assert_eq!(record.school, None);
        assert_eq!(record.office.as_deref(), Some("Records Section"));
        assert_eq!(record.division_name.as_deref(), Some("Regional Office"));
        assert_eq!(record.district_name.as_deref(), Some("Administration"));
    }

    #[test]
    fn record_without_affiliation_resolves_to_nulls() {
        let mut row = sample_row();
        row.school_name = None;
        row.district_name = None;
        row.school_division = None;

        let record = CardRecord::from_row(row);
        assert_eq!(record.school, None);
        assert_eq!(record.office, None);
        assert_eq!(record.division_name, None);
        assert_eq!(record.district_name, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mut row = sample_row();
        row.f_name = None;
        row.participant_type = None;
        row.participant_image_url = None;

        let record = CardRecord::from_row(row);
        assert_eq!(record.name, "N/A");
        assert_eq!(record.participant_type, "N/A");
        assert_eq!(record.participant_image_url, "");
    }
}
