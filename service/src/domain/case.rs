//! [`Case`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Single recorded instance of the tracked condition.
///
/// [`Case`]s are owned by the backend and never modified once fetched.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Case {
    /// ID of this [`Case`].
    pub id: Id,

    /// [`Status`] of this [`Case`].
    #[serde(rename = "casestatus")]
    pub status: Status,

    /// [`DateTime`] when this [`Case`] was detected.
    #[serde(rename = "detected", with = "common::datetime::serde::rfc3339")]
    pub detected_at: DetectionDateTime,

    /// [`Age`] of the person, if known.
    #[serde(default)]
    pub age: Option<Age>,

    /// [`Gender`] of the person.
    pub gender: Gender,
}

/// ID of a [`Case`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Id(String);

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Age of a person in full years.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Age(u16);

define_kind! {
    #[doc = "Status of a [`Case`]."]
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Status {
        #[doc = "The person is still ill."]
        Active = "active",

        #[doc = "The person has recovered."]
        Recovered = "recovered",

        #[doc = "The person has died."]
        Dead = "dead",
    }
}

define_kind! {
    #[doc = "Gender of a person a [`Case`] is about."]
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Gender {
        #[doc = "Male."]
        Male = "male",

        #[doc = "Female."]
        Female = "female",
    }
}

/// [`DateTime`] when a [`Case`] was detected.
pub type DetectionDateTime = DateTimeOf<(Case, unit::Detection)>;

#[cfg(test)]
mod spec {
    use super::{Case, Gender, Status};

    #[test]
    fn deserializes_backend_representation() {
        let case: Case = serde_json::from_str(
            r#"{
                "id": "ck8a1",
                "casestatus": "recovered",
                "detected": "2020-03-20T12:00:00Z",
                "age": 34,
                "gender": "female"
            }"#,
        )
        .unwrap();

        assert_eq!(case.id.to_string(), "ck8a1");
        assert_eq!(case.status, Status::Recovered);
        assert_eq!(case.detected_at.to_date_string(), "20/03/2020");
        assert_eq!(case.age.map(u16::from), Some(34));
        assert_eq!(case.gender, Gender::Female);
    }

    #[test]
    fn age_is_optional() {
        for json in [
            r#"{"id":"a","casestatus":"dead","detected":"2020-03-20T12:00:00Z","gender":"male"}"#,
            r#"{"id":"a","casestatus":"dead","detected":"2020-03-20T12:00:00Z","age":null,"gender":"male"}"#,
        ] {
            let case: Case = serde_json::from_str(json).unwrap();

            assert_eq!(case.age, None);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        let res = serde_json::from_str::<Case>(
            r#"{"id":"a","casestatus":"unknown","detected":"2020-03-20T12:00:00Z","gender":"male"}"#,
        );

        assert!(res.is_err());
    }
}
