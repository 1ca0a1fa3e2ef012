//! Serde roundtrip and JsonSchema validation tests for forum records.

use chrono::Utc;
use schemars::schema_for;
use forum_core::entities::*;
use forum_core::enums::*;
use forum_core::selector::Selector;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    anonymous_question_roundtrip,
    QuestionRecord,
    QuestionRecord {
        id: "2".into(),
        title: "How to center a div in CSS?".into(),
        description: "Centering both horizontally and vertically.".into(),
        tags: vec!["css".into(), "html".into()],
        author: AuthorDescriptor::from_name("Silent Lemur #234"),
        votes: 8,
        answers: 5,
        age: "4 hours ago".into(),
        is_anonymous: true,
        pseudonym: Some("Silent Lemur #234".into()),
    }
);

roundtrip_and_validate!(
    guest_answer_roundtrip,
    AnswerRecord,
    AnswerRecord {
        id: "3".into(),
        question_id: "1".into(),
        content: "Use useEffect to observe the updated value.".into(),
        author: AuthorDescriptor::from_name("Guest Bear"),
        votes: 3,
        age: "30 minutes ago".into(),
        is_accepted: false,
        is_guest: true,
        is_anonymous: false,
        pseudonym: None,
    }
);

roundtrip_and_validate!(
    guest_submission_roundtrip,
    GuestSubmission,
    GuestSubmission {
        id: "g-1".into(),
        question_id: "1".into(),
        question_title: "How to use React hooks effectively?".into(),
        content: "Hooks let functional components hold state.".into(),
        nickname: "Guest Owl".into(),
        pseudonym: "Wise Owl #512".into(),
        submitted_at: Utc::now(),
        status: ModerationStatus::Pending,
        flags: vec![],
        metadata: SubmissionMetadata {
            ip: "192.168.1.100".into(),
            user_agent: "Mozilla/5.0".into(),
        },
    }
);

roundtrip_and_validate!(tag_selector_roundtrip, Selector<Tag>, Selector::Only(Tag::NodeJs));

roundtrip_and_validate!(category_selector_all_roundtrip, Selector<Category>, Selector::All);

#[test]
fn anonymous_question_displays_pseudonym() {
    let question = QuestionRecord {
        id: "4".into(),
        title: "Node.js async/await error handling patterns".into(),
        description: "Looking for effective patterns.".into(),
        tags: vec!["nodejs".into()],
        author: AuthorDescriptor::from_name("Real Name"),
        votes: 6,
        answers: 1,
        age: "8 hours ago".into(),
        is_anonymous: true,
        pseudonym: Some("Brave Otter #145".into()),
    };

    let shown = question.display_author();
    assert_eq!(shown.name, "Brave Otter #145");
    assert_eq!(shown.initials, "BO");
    assert!(question.validate().is_ok());
}

#[test]
fn anonymous_question_without_pseudonym_is_invalid() {
    let question = QuestionRecord {
        id: "9".into(),
        title: "Missing pseudonym".into(),
        description: String::new(),
        tags: vec![],
        author: AuthorDescriptor::from_name("Someone"),
        votes: 0,
        answers: 0,
        age: "just now".into(),
        is_anonymous: true,
        pseudonym: None,
    };

    assert!(question.validate().is_err());
    assert_eq!(question.display_author().name, "Someone");
}
