//! Demo data the board can start from.

use chrono::{Duration, Utc};
use forum_core::entities::{
    AnswerRecord, AuthorDescriptor, GuestSubmission, QuestionRecord, SubmissionMetadata,
};
use forum_core::enums::ModerationStatus;

#[allow(clippy::too_many_arguments)]
fn question(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    author: &str,
    votes: i64,
    answers: u32,
    age: &str,
) -> QuestionRecord {
    QuestionRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        author: AuthorDescriptor::from_name(author),
        votes,
        answers,
        age: age.to_string(),
        is_anonymous: false,
        pseudonym: None,
    }
}

fn anonymous(mut record: QuestionRecord) -> QuestionRecord {
    record.is_anonymous = true;
    record.pseudonym = Some(record.author.name.clone());
    record
}

/// Seed questions, newest first.
#[must_use]
pub fn questions() -> Vec<QuestionRecord> {
    vec![
        question(
            "1",
            "React useState hook not updating state immediately",
            "I'm having trouble with useState not updating the state immediately when I call \
             the setter function. The component doesn't re-render with the new value right away.",
            &["react", "javascript", "hooks"],
            "John Developer",
            12,
            3,
            "2 hours ago",
        ),
        anonymous(question(
            "2",
            "How to center a div in CSS?",
            "I've been trying different methods to center a div both horizontally and \
             vertically, but nothing seems to work consistently across different browsers.",
            &["css", "html"],
            "Silent Lemur #234",
            8,
            5,
            "4 hours ago",
        )),
        question(
            "3",
            "TypeScript generic constraints best practices",
            "What are the best practices when working with generic constraints in TypeScript? \
             I want to ensure type safety while maintaining flexibility.",
            &["typescript", "generics"],
            "Sarah Wilson",
            15,
            2,
            "6 hours ago",
        ),
        anonymous(question(
            "4",
            "Node.js async/await error handling patterns",
            "I'm looking for the most effective patterns to handle errors when using \
             async/await in Node.js applications.",
            &["nodejs", "javascript", "async"],
            "Brave Otter #145",
            6,
            1,
            "8 hours ago",
        )),
        question(
            "5",
            "Python list comprehension vs traditional loops performance",
            "When should I use list comprehensions vs traditional for loops in Python? \
             Are there significant performance differences?",
            &["python", "performance"],
            "Mike Chen",
            11,
            4,
            "12 hours ago",
        ),
    ]
}

/// Seed answers for question "1".
#[must_use]
pub fn answers() -> Vec<AnswerRecord> {
    vec![
        AnswerRecord {
            id: "1".to_string(),
            question_id: "1".to_string(),
            content: "This is expected behavior in React. The useState setter is asynchronous, \
                      so the update is not visible until the next render."
                .to_string(),
            author: AuthorDescriptor::from_name("Jane Smith"),
            votes: 8,
            age: "1 hour ago".to_string(),
            is_accepted: true,
            is_guest: false,
            is_anonymous: false,
            pseudonym: None,
        },
        AnswerRecord {
            id: "2".to_string(),
            question_id: "1".to_string(),
            content: "Use the functional form of setState to work with the latest state."
                .to_string(),
            author: AuthorDescriptor::from_name("Clever Fox #892"),
            votes: 5,
            age: "45 minutes ago".to_string(),
            is_accepted: false,
            is_guest: false,
            is_anonymous: true,
            pseudonym: Some("Clever Fox #892".to_string()),
        },
        AnswerRecord {
            id: "3".to_string(),
            question_id: "1".to_string(),
            content: "Another approach is to use useEffect to listen for state changes."
                .to_string(),
            author: AuthorDescriptor::from_name("Guest Bear"),
            votes: 3,
            age: "30 minutes ago".to_string(),
            is_accepted: false,
            is_guest: true,
            is_anonymous: false,
            pseudonym: None,
        },
    ]
}

/// Seed guest moderation queue, pointing at the given questions.
#[must_use]
pub fn guest_submissions(questions: &[QuestionRecord]) -> Vec<GuestSubmission> {
    let now = Utc::now();
    let title_of = |id: &str| {
        questions
            .iter()
            .find(|q| q.id == id)
            .map(|q| q.title.clone())
            .unwrap_or_default()
    };

    let entry = |id: &str,
                 question_id: &str,
                 content: &str,
                 nickname: &str,
                 pseudonym: &str,
                 minutes_ago: i64,
                 status: ModerationStatus,
                 flags: &[&str],
                 ip: &str,
                 user_agent: &str| GuestSubmission {
        id: id.to_string(),
        question_id: question_id.to_string(),
        question_title: title_of(question_id),
        content: content.to_string(),
        nickname: nickname.to_string(),
        pseudonym: pseudonym.to_string(),
        submitted_at: now - Duration::minutes(minutes_ago),
        status,
        flags: flags.iter().map(ToString::to_string).collect(),
        metadata: SubmissionMetadata {
            ip: ip.to_string(),
            user_agent: user_agent.to_string(),
        },
    };

    vec![
        entry(
            "g-1",
            "1",
            "This is a helpful answer that explains the concept clearly with examples. React \
             hooks are powerful tools for managing state and lifecycle in functional components.",
            "Guest Owl",
            "Gentle Owl #318",
            3,
            ModerationStatus::Pending,
            &[],
            "192.168.1.100",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
        ),
        entry(
            "g-2",
            "4",
            "Buy now! Best deals! Click here for amazing discounts! Visit our website for more \
             offers!",
            "Anonymous Guest",
            "Rapid Gecko #660",
            5,
            ModerationStatus::Pending,
            &["Too many promotional words", "Suspected spam", "Multiple links"],
            "45.123.45.67",
            "Bot/1.0",
        ),
        entry(
            "g-3",
            "3",
            "Great question! I recommend starting with the official documentation and building \
             small projects.",
            "Helpful Fox",
            "Kind Fox #417",
            60,
            ModerationStatus::Approved,
            &[],
            "10.0.0.5",
            "Mozilla/5.0 (Mac; Intel Mac OS X)",
        ),
        entry(
            "g-4",
            "2",
            "spam spam spam",
            "Guest",
            "Shy Raven #903",
            120,
            ModerationStatus::Rejected,
            &["Too short", "Repetitive content"],
            "123.45.67.89",
            "Bot/Spam",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_questions_satisfy_anonymity_invariant() {
        for question in questions() {
            assert!(question.validate().is_ok(), "{} is invalid", question.id);
        }
    }

    #[test]
    fn guest_titles_resolve_against_questions() {
        let qs = questions();
        for submission in guest_submissions(&qs) {
            assert!(!submission.question_title.is_empty(), "{}", submission.id);
        }
    }
}
