//! Guest answers and the admin review queue.

use chrono::Utc;
use forum_core::entities::{AnswerRecord, AuthorDescriptor, GuestSubmission, SubmissionMetadata};
use forum_core::enums::{ModerationStatus, ModerationTab, Role};
use forum_core::errors::CoreError;
use rand::Rng;

use crate::board::{ForumBoard, JUST_POSTED, PREFIX_ANSWER, PREFIX_GUEST};
use crate::drafts::GuestDraft;
use crate::error::BoardError;
use crate::screening;

const DEFAULT_NICKNAME: &str = "Anonymous Guest";

fn require_admin(role: Role, action: &str) -> Result<(), BoardError> {
    if role.is_admin() {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!("{action} requires admin privileges")).into())
    }
}

fn in_tab(submission: &GuestSubmission, tab: ModerationTab) -> bool {
    match tab {
        ModerationTab::All => true,
        ModerationTab::Pending => submission.status == ModerationStatus::Pending,
        ModerationTab::Approved => submission.status == ModerationStatus::Approved,
        ModerationTab::Rejected => submission.status == ModerationStatus::Rejected,
        ModerationTab::Suspected => submission.is_suspected(),
    }
}

impl ForumBoard {
    /// Queue a guest answer for review under a fresh pseudonym.
    ///
    /// # Errors
    ///
    /// Returns `Banned` for a banned IP, `NotFound` for an unknown question,
    /// `Validation` for blank content, and `BoardError::Pseudonym` when no
    /// pseudonym can be issued.
    pub fn submit_guest_answer<R: Rng + ?Sized>(
        &mut self,
        question_id: &str,
        draft: GuestDraft,
        rng: &mut R,
    ) -> Result<GuestSubmission, BoardError> {
        if self.banned_ips.contains(&draft.ip) {
            tracing::warn!(ip = %draft.ip, "board: submission from banned IP refused");
            return Err(BoardError::Banned { ip: draft.ip });
        }
        let question_title = self
            .question(question_id)
            .map(|q| q.title.clone())
            .ok_or_else(|| BoardError::not_found("question", question_id))?;
        if draft.content.trim().is_empty() {
            return Err(BoardError::validation("answer content is empty"));
        }

        let pseudonym = self.pseudonyms.generate(rng)?.into_string();
        let flags = screening::screen(&draft.content, &self.config().moderation);
        let nickname = draft
            .nickname
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NICKNAME.to_string());

        let submission = GuestSubmission {
            id: self.generate_id(PREFIX_GUEST),
            question_id: question_id.to_string(),
            question_title,
            content: draft.content,
            nickname,
            pseudonym,
            submitted_at: Utc::now(),
            status: ModerationStatus::Pending,
            flags,
            metadata: SubmissionMetadata {
                ip: draft.ip,
                user_agent: draft.user_agent,
            },
        };

        tracing::info!(
            id = %submission.id,
            question_id,
            suspected = submission.is_suspected(),
            "board: guest answer queued"
        );
        self.submissions.push(submission.clone());
        Ok(submission)
    }

    /// Submissions visible under `tab`, in submission order.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` unless `role` is admin.
    pub fn moderation_queue(
        &self,
        role: Role,
        tab: ModerationTab,
    ) -> Result<Vec<&GuestSubmission>, BoardError> {
        require_admin(role, "viewing the moderation queue")?;
        Ok(self
            .submissions
            .iter()
            .filter(|s| in_tab(s, tab))
            .collect())
    }

    /// Number of submissions awaiting review.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.submissions
            .iter()
            .filter(|s| s.status == ModerationStatus::Pending)
            .count()
    }

    #[must_use]
    pub fn is_banned(&self, ip: &str) -> bool {
        self.banned_ips.contains(ip)
    }

    /// Approve a pending submission and publish it as a guest answer.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for non-admins, `NotFound` for an unknown id, and
    /// `InvalidTransition` if the submission is no longer pending.
    pub fn approve(&mut self, role: Role, id: &str) -> Result<AnswerRecord, BoardError> {
        require_admin(role, "approving guest answers")?;
        let submission = self.transition(id, ModerationStatus::Approved)?;

        let answer = AnswerRecord {
            id: self.generate_id(PREFIX_ANSWER),
            question_id: submission.question_id,
            content: submission.content,
            author: AuthorDescriptor::from_name(&submission.nickname),
            votes: 0,
            age: String::from(JUST_POSTED),
            is_accepted: false,
            is_guest: true,
            is_anonymous: true,
            pseudonym: Some(submission.pseudonym),
        };
        self.publish_answer(answer.clone())?;
        Ok(answer)
    }

    /// Reject a pending submission.
    ///
    /// # Errors
    ///
    /// Same as [`Self::approve`].
    pub fn reject(&mut self, role: Role, id: &str) -> Result<GuestSubmission, BoardError> {
        require_admin(role, "rejecting guest answers")?;
        self.transition(id, ModerationStatus::Rejected)
    }

    /// Ban the submitter's IP and reject the submission if it is still pending.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for non-admins and `NotFound` for an unknown id.
    pub fn ban_ip(&mut self, role: Role, id: &str) -> Result<GuestSubmission, BoardError> {
        require_admin(role, "banning IPs")?;
        let submission = self
            .submissions
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| BoardError::not_found("guest_submission", id))?;

        self.banned_ips.insert(submission.metadata.ip.clone());
        tracing::info!(id, ip = %submission.metadata.ip, "board: IP banned");

        if submission.status == ModerationStatus::Pending {
            self.transition(id, ModerationStatus::Rejected)
        } else {
            Ok(submission)
        }
    }

    fn transition(
        &mut self,
        id: &str,
        next: ModerationStatus,
    ) -> Result<GuestSubmission, BoardError> {
        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| BoardError::not_found("guest_submission", id))?;

        if !submission.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "guest_submission".to_string(),
                id: id.to_string(),
                from: submission.status.to_string(),
                to: next.to_string(),
            }
            .into());
        }

        submission.status = next;
        tracing::info!(id, status = %next, "board: guest answer reviewed");
        Ok(submission.clone())
    }
}
