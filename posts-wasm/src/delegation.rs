use posts_core::{PostAction, PostId};

/// Разбирает цель клика в контейнере: класс кнопки и её `data-id`.
///
/// Клики не по кнопкам действий (или с испорченным `data-id`) дают `None`.
pub(crate) fn parse_action_target(
    class_name: &str,
    data_id: Option<&str>,
) -> Option<(PostAction, PostId)> {
    let kind = class_name
        .split_whitespace()
        .find_map(|class| class.parse::<PostAction>().ok())?;
    let id = data_id?.parse::<PostId>().ok()?;
    Some((kind, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_and_delete_buttons() {
        assert_eq!(
            parse_action_target("edit-btn", Some("2")),
            Some((PostAction::Edit, PostId(2)))
        );
        assert_eq!(
            parse_action_target("btn delete-btn", Some("17")),
            Some((PostAction::Delete, PostId(17)))
        );
    }

    #[test]
    fn ignores_clicks_outside_action_buttons() {
        assert_eq!(parse_action_target("", None), None);
        assert_eq!(parse_action_target("post-actions", Some("1")), None);
    }

    #[test]
    fn ignores_missing_or_broken_id() {
        assert_eq!(parse_action_target("edit-btn", None), None);
        assert_eq!(parse_action_target("delete-btn", Some("NaN")), None);
    }
}
