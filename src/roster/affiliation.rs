/// A participant's resolved organizational attachment.
///
/// Registrations reference either a school or an office; the two paths reach
/// a division through different tables (school → district → division,
/// office → division directly, with the functional division standing in for
/// the district). The union is resolved once here, at the data-access
/// boundary, so no consumer re-implements the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affiliation {
    School {
        school: String,
        district: Option<String>,
        division: Option<String>,
    },
    Office {
        section: Option<String>,
        functional_division: Option<String>,
        division: Option<String>,
    },
    Unaffiliated,
}

impl Affiliation {
    /// Resolves the left-joined affiliation columns of one roster row.
    ///
    /// A school attachment takes precedence over an office attachment; a row
    /// with neither resolves to `Unaffiliated` rather than an error.
    pub fn resolve(
        school_name: Option<String>,
        district_name: Option<String>,
        school_division: Option<String>,
        office_id: Option<i32>,
        section_name: Option<String>,
        functional_division_name: Option<String>,
        office_division: Option<String>,
    ) -> Self {
        if let Some(school) = school_name {
            Affiliation::School {
                school,
                district: district_name,
                division: school_division,
            }
        } else if office_id.is_some() {
            Affiliation::Office {
                section: section_name,
                functional_division: functional_division_name,
                division: office_division,
            }
        } else {
            Affiliation::Unaffiliated
        }
    }

    /// School name, when the school path applies.
    pub fn school(&self) -> Option<&str> {
        match self {
            Affiliation::School { school, .. } => Some(school),
            _ => None,
        }
    }

    /// Office label (the office's section name), when the office path applies.
    pub fn office(&self) -> Option<&str> {
        match self {
            Affiliation::Office { section, .. } => section.as_deref(),
            _ => None,
        }
    }

    /// Effective division: the school-path division when a school attachment
    /// exists, else the office-path division.
    pub fn division_name(&self) -> Option<&str> {
        match self {
            Affiliation::School { division, .. } => division.as_deref(),
            Affiliation::Office { division, .. } => division.as_deref(),
            Affiliation::Unaffiliated => None,
        }
    }

    /// Effective district: the district name on the school path, else the
    /// functional-division name on the office path.
    pub fn district_name(&self) -> Option<&str> {
        match self {
            Affiliation::School { district, .. } => district.as_deref(),
            Affiliation::Office {
                functional_division, ..
            } => functional_division.as_deref(),
            Affiliation::Unaffiliated => None,
        }
    }
}
