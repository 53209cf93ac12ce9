//! Human-readable explanations of a description.

use crate::types::{Gender, KinPath, KinshipTerm, Person, Step};

/// Explain a path step by step, prefixed with the overall term.
///
/// ```text
/// Lan là thím của Minh. Hùng là cha của Minh; Tâm là cha của Hùng; ...
/// ```
pub fn explain(path: &KinPath, term: Option<&KinshipTerm>) -> String {
    let subject = path.start();
    let target = path.end();

    if path.is_empty() {
        return format!("{} là bản thân.", subject.name);
    }

    let headline = match term {
        Some(term) => format!(
            "{} là {} của {}.",
            target.name,
            term.label().to_lowercase(),
            subject.name
        ),
        None => format!(
            "Không xác định được quan hệ giữa {} và {}.",
            subject.name, target.name
        ),
    };

    let steps: Vec<String> = path
        .nodes()
        .windows(2)
        .zip(path.steps())
        .map(|(pair, step)| describe_step(&pair[0], &pair[1], *step))
        .collect();

    format!("{} {}.", headline, steps.join("; "))
}

/// Explanation when no connecting path exists.
pub fn unrelated(subject: &Person, target: &Person) -> String {
    format!(
        "Không tìm thấy quan hệ giữa {} và {}.",
        subject.name, target.name
    )
}

fn describe_step(from: &Person, to: &Person, step: Step) -> String {
    let role = match step {
        Step::Up => by_gender(to.gender, "cha", "mẹ", "cha/mẹ"),
        Step::Down => by_gender(to.gender, "con trai", "con gái", "con"),
        Step::Spouse => by_gender(to.gender, "chồng", "vợ", "vợ/chồng"),
    };
    format!("{} là {} của {}", to.name, role, from.name)
}

fn by_gender(gender: Gender, male: &'static str, female: &'static str, other: &'static str) -> &'static str {
    match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Other => other,
    }
}
