use super::features::Feature;
use smartstring::alias::String;

#[derive(PartialEq, Debug, Clone)]
pub enum Condition {
    KeyPresence(String),
    ValueMatch(String, String),
}

impl Condition {
    pub fn new(key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            return Condition::ValueMatch(key.into(), value.into());
        }
        Condition::KeyPresence(key.into())
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Group {
    pub conditions: Vec<Condition>,
}

fn parse_condition(condition_str: &str) -> Condition {
    let mut split = condition_str.splitn(2, '~');
    let key = split.next().unwrap_or_default();
    Condition::new(key, split.next())
}

fn parse_group(group_str: &str) -> Group {
    let conditions = group_str.split('+').map(parse_condition).collect();
    Group { conditions }
}

/// Parse an expression into filter groups over feature properties.
///
/// Stating a key (`ntaname`) picks all features carrying that property. A value
/// can be required with a `~` separator (`boro_name~Brooklyn`); non-string
/// property values are compared by their json text (`admin_level~8`). Several
/// conditions joined by `+` must all hold, and groups separated by `,` are
/// alternatives.
///
/// # Example
///
/// ```
/// use geojson_shapes::filter::parse;
///
/// let groups = parse("boro_name~Brooklyn+ntaname,park");
/// assert_eq!(groups.len(), 2);
/// let group = &groups[0];
/// assert_eq!(group.conditions.len(), 2);
/// ```
pub fn parse(selector_str: &str) -> Vec<Group> {
    selector_str.split(',').map(parse_group).collect()
}

fn check_condition(feature: &Feature, condition: &Condition) -> bool {
    match condition {
        Condition::KeyPresence(key) => feature.properties.contains_key(key.as_str()),
        Condition::ValueMatch(key, value) => feature
            .property(key.as_str())
            .map_or(false, |text| text == value.as_str()),
    }
}

fn check_group(feature: &Feature, group: &Group) -> bool {
    group.conditions.iter().all(|c| check_condition(feature, c))
}

pub trait Filter {
    fn filter(&self, groups: &[Group]) -> bool;
}

impl Filter for Feature {
    fn filter(&self, groups: &[Group]) -> bool {
        groups.iter().any(|g| check_group(self, g))
    }
}
