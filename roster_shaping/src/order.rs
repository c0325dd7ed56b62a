//! Client ordering expressions: parsing into [`OrderCriterion`] lists and
//! applying them as a stable composite sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::schema::{AttributeSchema, Getter, Record};
use crate::value::FieldValue;

/// Sort order for one criterion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (smallest first). This is the default.
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "ascending",
                SortDirection::Desc => "descending",
            }
        )
    }
}

/// One `(attribute, direction)` pair of an ordering expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderCriterion {
    /// Declared attribute name.
    pub attribute: &'static str,
    pub direction: SortDirection,
}

impl OrderCriterion {
    pub const fn new(attribute: &'static str, direction: SortDirection) -> Self {
        Self {
            attribute,
            direction,
        }
    }
}

/// Parses an ordering expression such as `"name desc, age"`.
///
/// Tokens are comma separated; the first word of each token names an
/// attribute and the token is descending when its remaining text ends with
/// `desc`. Unknown attributes and repeats are skipped. When nothing
/// survives, the result is `default_attribute` ascending.
pub fn parse_order<R>(
    expression: &str,
    schema: &AttributeSchema<R>,
    default_attribute: &'static str,
) -> Vec<OrderCriterion> {
    let mut criteria: Vec<OrderCriterion> = Vec::new();

    for token in expression.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let (name, rest) = token.split_once(char::is_whitespace).unwrap_or((token, ""));
        let attribute = match schema.resolve(name) {
            Some(attribute) => attribute,
            None => {
                tracing::debug!(token, "Ignoring unknown order attribute");
                continue;
            }
        };
        if criteria.iter().any(|c| c.attribute == attribute.name) {
            continue;
        }
        let direction = if rest.trim().to_lowercase().ends_with("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        criteria.push(OrderCriterion::new(attribute.name, direction));
    }

    if criteria.is_empty() {
        let attribute = schema
            .resolve(default_attribute)
            .map_or(default_attribute, |attribute| attribute.name);
        criteria.push(OrderCriterion::new(attribute, SortDirection::Asc));
    }
    criteria
}

/// Renders criteria as `"Name ascending, Age descending"`.
pub fn to_order_clause(criteria: &[OrderCriterion]) -> String {
    criteria
        .iter()
        .map(|c| format!("{} {}", c.attribute, c.direction))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accessors for the resolvable criteria. Criteria naming an attribute the
/// schema does not know compare as equal.
fn sort_keys<R>(
    criteria: &[OrderCriterion],
    schema: &AttributeSchema<R>,
) -> Vec<(Getter<R>, SortDirection)> {
    criteria
        .iter()
        .filter_map(|c| schema.resolve(c.attribute).map(|a| (a.get, c.direction)))
        .collect()
}

fn compare_keys(left: &[FieldValue], right: &[FieldValue], dirs: &[SortDirection]) -> Ordering {
    for ((l, r), dir) in left.iter().zip(right).zip(dirs) {
        let ord = match dir {
            SortDirection::Asc => l.total_cmp(r),
            SortDirection::Desc => r.total_cmp(l),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Composite comparator over records. The first criterion is the primary key.
pub fn comparator<R>(
    criteria: &[OrderCriterion],
    schema: &AttributeSchema<R>,
) -> impl Fn(&R, &R) -> Ordering {
    let keys = sort_keys(criteria, schema);
    move |left: &R, right: &R| {
        for (get, dir) in &keys {
            let ord = match dir {
                SortDirection::Asc => get(left).total_cmp(&get(right)),
                SortDirection::Desc => get(right).total_cmp(&get(left)),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

/// Stable sort of `records` by `criteria`. Attribute values are read once
/// per record.
pub fn sort_records<R: Record>(
    records: Vec<R>,
    criteria: &[OrderCriterion],
    schema: &AttributeSchema<R>,
) -> Vec<R> {
    let keys = sort_keys(criteria, schema);
    if keys.is_empty() || records.len() < 2 {
        return records;
    }
    let dirs: Vec<SortDirection> = keys.iter().map(|(_, dir)| *dir).collect();
    let mut keyed: Vec<(Vec<FieldValue>, R)> = records
        .into_iter()
        .map(|record| (keys.iter().map(|(get, _)| get(&record)).collect(), record))
        .collect();
    keyed.sort_by(|a, b| compare_keys(&a.0, &b.0, &dirs));
    keyed.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::schema_for;
    use crate::test_support::{bob_and_ann, names, Person};

    fn parse(expression: &str) -> Vec<OrderCriterion> {
        parse_order(expression, &schema_for::<Person>(), Person::DEFAULT_ORDER)
    }

    fn sorted(expression: &str, people: Vec<Person>) -> Vec<Person> {
        let schema = schema_for::<Person>();
        let criteria = parse_order(expression, &schema, Person::DEFAULT_ORDER);
        sort_records(people, &criteria, &schema)
    }

    #[test]
    fn parses_directions_and_precedence() {
        assert_eq!(
            parse("age desc, name"),
            vec![
                OrderCriterion::new("Age", SortDirection::Desc),
                OrderCriterion::new("Name", SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn direction_suffix_is_case_insensitive() {
        assert_eq!(
            parse("  NAME   DESC "),
            vec![OrderCriterion::new("Name", SortDirection::Desc)]
        );
        assert_eq!(
            parse("name ascending"),
            vec![OrderCriterion::new("Name", SortDirection::Asc)]
        );
    }

    #[test]
    fn unknown_attributes_are_dropped() {
        assert_eq!(
            parse("bogus desc, age desc, ,"),
            vec![OrderCriterion::new("Age", SortDirection::Desc)]
        );
    }

    #[test]
    fn empty_or_unresolvable_falls_back_to_default() {
        let default = vec![OrderCriterion::new("Name", SortDirection::Asc)];
        assert_eq!(parse(""), default);
        assert_eq!(parse("   "), default);
        assert_eq!(parse(",,,"), default);
        assert_eq!(parse("bogus desc"), default);
    }

    #[test]
    fn repeated_attribute_keeps_first() {
        assert_eq!(
            parse("age desc, AGE"),
            vec![OrderCriterion::new("Age", SortDirection::Desc)]
        );
    }

    #[test]
    fn bob_and_ann_orderings() {
        assert_eq!(names(&sorted("name desc", bob_and_ann())), vec!["Bob", "Ann"]);
        assert_eq!(names(&sorted("age", bob_and_ann())), vec!["Ann", "Bob"]);
        assert_eq!(names(&sorted("bogus", bob_and_ann())), vec!["Ann", "Bob"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let people = vec![
            Person::new(1, "Cy", 40),
            Person::new(2, "Ann", 30),
            Person::new(3, "Bo", 40),
            Person::new(4, "Di", 30),
        ];
        let ids: Vec<i64> = sorted("age", people.clone()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        let ids: Vec<i64> = sorted("age desc", people).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let people = vec![
            Person::new(1, "Cy", 40),
            Person::new(2, "Bo", 40),
            Person::new(3, "Ann", 30),
        ];
        assert_eq!(
            names(&sorted("age desc, name", people)),
            vec!["Bo", "Cy", "Ann"]
        );
    }

    #[test]
    fn comparator_matches_sort_records() {
        let schema = schema_for::<Person>();
        let criteria = parse("name desc");
        let mut people = bob_and_ann();
        people.push(Person::new(3, "Cat", 20));
        people.sort_by(comparator(&criteria, &schema));
        assert_eq!(names(&people), vec!["Cat", "Bob", "Ann"]);
    }

    #[test]
    fn order_clause_rendering() {
        assert_eq!(
            to_order_clause(&parse("name, age desc")),
            "Name ascending, Age descending"
        );
    }

    #[test]
    fn sort_direction_from_str() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
