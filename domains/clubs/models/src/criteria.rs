use crate::Club;

/// Search predicates understood by a [`ClubStore`](crate::ClubStore).
/// Matches are ordered by member count descending before `offset` and
/// `limit` apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubCriteria {
    /// Case-insensitive substring over name and description.
    pub text: Option<String>,
    pub category: Option<String>,
    pub verified: Option<bool>,
    pub limit: Option<i64>,
    pub offset: i64,
}

impl ClubCriteria {
    pub fn matches(&self, club: &Club) -> bool {
        if let Some(verified) = self.verified {
            if club.is_verified != verified {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &club.category != category {
                return false;
            }
        }
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                club.name.to_lowercase().contains(&needle)
                    || club.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}
