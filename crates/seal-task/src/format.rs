//! Text rendering of training pairs for prompts

use crate::task::ArcTask;

/// Render every training pair as numbered plain text
///
/// Each pair becomes:
///
/// ```text
/// Example 1:
/// Input:
/// 0 1
/// 1 0
///
/// Output:
/// 1 0
/// 0 1
///
/// ```
///
/// Pairs are numbered from 1 in file order and concatenated.
#[must_use]
pub fn format_examples(task: &ArcTask) -> String {
    let mut formatted = String::new();

    for (idx, example) in task.train.iter().enumerate() {
        formatted.push_str(&format!("Example {}:\nInput:\n", idx + 1));
        formatted.push_str(&example.input.render());
        formatted.push_str("\nOutput:\n");
        formatted.push_str(&example.output.render());
        formatted.push('\n');
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Example;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_single_pair() {
        let task = ArcTask::new(vec![Example::new(
            vec![vec![0u8, 1], vec![1, 0]],
            vec![vec![1u8, 0], vec![0, 1]],
        )]);

        assert_eq!(
            format_examples(&task),
            "Example 1:\nInput:\n0 1\n1 0\n\nOutput:\n1 0\n0 1\n\n"
        );
    }

    #[test]
    fn numbers_pairs_from_one() {
        let task = ArcTask::new(vec![
            Example::new(vec![vec![1u8]], vec![vec![2u8]]),
            Example::new(vec![vec![3u8]], vec![vec![4u8]]),
            Example::new(vec![vec![5u8]], vec![vec![6u8]]),
        ]);

        let text = format_examples(&task);
        let headers: Vec<_> = text.lines().filter(|l| l.starts_with("Example")).collect();
        assert_eq!(headers, vec!["Example 1:", "Example 2:", "Example 3:"]);
        assert!(text.contains("Example 2:\nInput:\n3\n\nOutput:\n4\n\n"));
    }

    #[test]
    fn empty_task_formats_to_nothing() {
        assert_eq!(format_examples(&ArcTask::new(Vec::new())), "");
    }
}
