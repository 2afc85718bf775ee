//! Update feed rendering.

use hearth_core::entities::ProjectUpdate;
use hearth_core::progress::updates_in_display_order;

use crate::views::format::format_timestamp_date;
use crate::views::{Theme, update_type_color};

/// Render the feed newest-first, imposing display order itself so every
/// rendering context shows creation timestamp descending.
#[must_use]
pub fn render_update_feed(updates: &[ProjectUpdate], theme: &Theme) -> String {
    if updates.is_empty() {
        return "No updates yet".to_string();
    }

    let ordered = updates_in_display_order(updates.to_vec());
    let mut blocks = Vec::new();
    for update in &ordered {
        blocks.push(update_entry(update, theme).join("\n"));
    }
    blocks.join("\n\n")
}

fn update_entry(update: &ProjectUpdate, theme: &Theme) -> Vec<String> {
    let badge = theme.paint(
        update.update_type.label(),
        update_type_color(update.update_type),
    );
    let date = format_timestamp_date(update.created_at, &theme.date_format);

    let mut lines = vec![format!("[{badge}] {}  ({date})", update.title)];
    if !update.content.is_empty() {
        lines.push(format!("    {}", update.content));
    }
    if let Some(image_url) = &update.image_url {
        lines.push(format!("    Photo: {image_url}"));
    }
    lines.push(format!("    Posted by {}", update.created_by));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use pretty_assertions::assert_eq;

    use hearth_core::enums::UpdateType;

    use super::*;

    fn update(id: &str, update_type: UpdateType, minutes_ago: i64) -> ProjectUpdate {
        ProjectUpdate {
            id: id.into(),
            project_id: "prj-1".into(),
            title: format!("Update {id}"),
            content: String::new(),
            update_type,
            image_url: None,
            created_at: Utc::now() - TimeDelta::minutes(minutes_ago),
            created_by: "Alvarez Crew".into(),
        }
    }

    #[test]
    fn empty_feed_has_explicit_zero_state() {
        assert_eq!(render_update_feed(&[], &Theme::plain()), "No updates yet");
    }

    #[test]
    fn renders_newest_first_regardless_of_input_order() {
        let shuffled = vec![
            update("oldest", UpdateType::Progress, 300),
            update("newest", UpdateType::Photo, 1),
            update("middle", UpdateType::Issue, 60),
        ];
        let out = render_update_feed(&shuffled, &Theme::plain());

        let newest = out.find("Update newest").unwrap();
        let middle = out.find("Update middle").unwrap();
        let oldest = out.find("Update oldest").unwrap();
        assert!(newest < middle && middle < oldest);
    }

    #[test]
    fn type_labels_follow_the_closed_enumeration() {
        let out = render_update_feed(&[update("a", UpdateType::Issue, 1)], &Theme::plain());
        assert!(out.contains("[Issue]"));

        let out = render_update_feed(&[update("b", UpdateType::Completion, 1)], &Theme::plain());
        assert!(out.contains("[Completion]"));
    }

    #[test]
    fn photo_url_and_author_are_shown() {
        let mut with_photo = update("p", UpdateType::Photo, 1);
        with_photo.image_url = Some("https://example.com/p.jpg".into());
        let out = render_update_feed(&[with_photo], &Theme::plain());
        assert!(out.contains("Photo: https://example.com/p.jpg"));
        assert!(out.contains("Posted by Alvarez Crew"));
    }

    #[test]
    fn content_is_skipped_when_empty() {
        let out = render_update_feed(&[update("a", UpdateType::Progress, 1)], &Theme::plain());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
    }
}
