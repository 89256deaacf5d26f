use crate::base;

/// Which projects to list.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::VariantNames,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    All,
}

impl Status {
    fn admits(self, p: &base::Project) -> bool {
        match self {
            Status::Active => p.active,
            Status::Inactive => !p.active,
            Status::All => true,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub status: Status,
    pub projects: base::Projects,
    pub entries: base::Entrylist,
}

const NA: &str = "n/a";

struct Leaf<'a> {
    label: String,
    hours: base::Hours,
    fees: std::borrow::Cow<'a, str>,
    rate: std::borrow::Cow<'a, str>,
}

impl Config {
    /// Clients at the top, their projects below with total hours logged, fee
    /// and effective hourly rate.
    pub fn to_tree(&self) -> base::Tree<'_> {
        let hours = self.entries.hours_by_project();
        let mut clients = Vec::<(&str, Vec<Leaf>)>::new();
        for (id, p) in self.projects.iter().filter(|(_, p)| self.status.admits(p)) {
            let h = hours.get(&id).copied().unwrap_or_default();
            let mut label = format!("{} #{}", p.name, id);
            if self.status == Status::All && !p.active {
                label.push_str(" (inactive)");
            }
            let leaf = Leaf {
                label,
                hours: h,
                fees: p.fees.map_or(NA.into(), |c| c.to_string().into()),
                rate: p
                    .fees
                    .and_then(|c| c.per_hour(h))
                    .map_or(NA.into(), |c| format!("{}/h", c).into()),
            };
            match clients.last_mut() {
                Some((client, leaves)) if *client == p.client => leaves.push(leaf),
                _ => clients.push((p.client.as_str(), vec![leaf])),
            }
        }

        let leaves = || clients.iter().flat_map(|(_, v)| v.iter());
        let alignment_charlen = leaves()
            .map(|l| {
                l.label.chars().count()
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + l.hours.charlen()
            })
            .max()
            .unwrap_or_default();
        let fees_width = leaves().map(|l| l.fees.chars().count()).max().unwrap_or_default();
        let rate_width = leaves().map(|l| l.rate.chars().count()).max().unwrap_or_default();

        let mut root = base::tree::Node::default();
        for (client, v) in clients.iter() {
            let node = root.push(*client);
            for l in v {
                let dashes = alignment_charlen
                    - l.label.chars().count()
                    - base::util::BOUNDING_SPACES_COUNT
                    - l.hours.charlen();
                let dashes = self.charset.dash.to_string().repeat(dashes);
                node.push(format!(
                    "{} {} {}h  fee {:>fw$}  rate {:>rw$}",
                    l.label,
                    dashes,
                    l.hours,
                    l.fees,
                    l.rate,
                    fw = fees_width,
                    rw = rate_width,
                ));
            }
        }
        tracing::debug!(clients = clients.len(), status = %self.status, "built project tree");
        base::Tree {
            charset: &self.charset,
            root,
        }
    }
}
