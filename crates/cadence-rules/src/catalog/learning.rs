//! Rules for course progress and consultation-form submissions.

use cadence_core::models::{FormKind, NotificationKind, Priority, Trigger};

use crate::rule::{Rule, RuleMessage};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "L-1",
            &[Trigger::LessonCompleted],
            NotificationKind::Celebration,
            Priority::Low,
            0,
            |ctx| !ctx.learning.all_completed(),
            |ctx| {
                let pct = (ctx.learning.completion_ratio * 100.0).round();
                RuleMessage::new(
                    "Lesson complete",
                    format!("Nice work. You're {pct:.0}% of the way through your course."),
                )
            },
        ),
        Rule::new(
            "L-2",
            &[Trigger::LessonCompleted],
            NotificationKind::Celebration,
            Priority::Normal,
            365,
            |ctx| ctx.learning.all_completed(),
            |_| {
                RuleMessage::new(
                    "Course complete",
                    "You've finished every module. Everything you learned is available to \
                     revisit any time.",
                )
            },
        ),
        Rule::new(
            "L-3",
            &[Trigger::LessonCompleted],
            NotificationKind::Insight,
            Priority::Low,
            30,
            |ctx| {
                let ratio = ctx.learning.completion_ratio;
                (0.5..1.0).contains(&ratio)
            },
            |ctx| {
                let module = ctx
                    .learning
                    .last_completed_module
                    .as_deref()
                    .unwrap_or("your latest module");
                RuleMessage::new(
                    "Halfway there",
                    format!("After finishing {module}, you're past the halfway mark."),
                )
            },
        ),
        Rule::new(
            "FS-1",
            &[Trigger::FormSubmitted],
            NotificationKind::Insight,
            Priority::Normal,
            0,
            |ctx| !ctx.forms.pending().is_empty(),
            |ctx| {
                let next = ctx
                    .forms
                    .pending()
                    .first()
                    .map(|k| format!("{k:?}"))
                    .unwrap_or_default();
                RuleMessage::new(
                    "Form received",
                    format!("Thanks, your answers are saved. Next up: form {next}."),
                )
            },
        ),
        Rule::new(
            "FS-2",
            &[Trigger::FormSubmitted],
            NotificationKind::Celebration,
            Priority::Normal,
            365,
            |ctx| FormKind::ALL.iter().all(|k| ctx.forms.is_submitted(*k)),
            |_| {
                RuleMessage::new(
                    "Consultation file complete",
                    "All consultation forms are in. Your specialist now has the full picture.",
                )
            },
        ),
    ]
}
