use crate::base;

/// Every project in the repository, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Projects(std::collections::BTreeMap<base::ProjectId, base::Project>);

impl Projects {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: base::ProjectId) -> Option<&base::Project> {
        self.0.get(&id)
    }

    pub fn next_id(&self) -> base::ProjectId {
        self.0.last_key_value().map_or(1, |(id, _)| id + 1)
    }

    /// Stores `project` under a fresh id and returns the id.
    pub fn insert(&mut self, project: base::Project) -> base::ProjectId {
        let id = self.next_id();
        self.0.insert(id, project);
        id
    }

    /// Replaces the project with the given id. Returns the previous value, or
    /// `None` without inserting if no such project exists.
    pub fn update(&mut self, id: base::ProjectId, project: base::Project) -> Option<base::Project> {
        let slot = self.0.get_mut(&id)?;
        Some(std::mem::replace(slot, project))
    }

    /// Projects ordered by client, then name, then id.
    pub fn iter(&self) -> impl Iterator<Item = (base::ProjectId, &base::Project)> {
        let mut v = self.0.iter().map(|(id, p)| (*id, p)).collect::<Vec<_>>();
        v.sort_by(|(a_id, a), (b_id, b)| {
            (&a.client, &a.name, a_id).cmp(&(&b.client, &b.name, b_id))
        });
        v.into_iter()
    }

    /// `client - name`, or a placeholder naming the id if it is unknown.
    pub fn label(&self, id: base::ProjectId) -> String {
        match self.get(id) {
            Some(p) => p.label(),
            None => format!("(unknown project {})", id),
        }
    }
}

impl FromIterator<(base::ProjectId, base::Project)> for Projects {
    fn from_iter<T: IntoIterator<Item = (base::ProjectId, base::Project)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Projects {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Projects {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Projects {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
