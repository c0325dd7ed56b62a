use crate::schema::{Attribute, Record};

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(id: i64, name: &str, age: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
        }
    }
}

impl Record for Person {
    const DEFAULT_ORDER: &'static str = "Name";

    fn attributes() -> Vec<Attribute<Self>> {
        vec![
            Attribute::<Self>::new("Id", |p| p.id.into()),
            Attribute::<Self>::new("Name", |p| p.name.as_str().into()),
            Attribute::<Self>::new("Age", |p| p.age.into()),
        ]
    }
}

/// `[{id:1,name:"Bob",age:30},{id:2,name:"Ann",age:25}]`
pub fn bob_and_ann() -> Vec<Person> {
    vec![Person::new(1, "Bob", 30), Person::new(2, "Ann", 25)]
}

pub fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.name.as_str()).collect()
}
