//! Output formatting for users added to a site group

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::OutputFormat;
use crate::spo::UserSharingResult;

use super::common::escape_csv;

/// Properties shown by the table output
pub const DEFAULT_PROPERTIES: &[&str] = &["DisplayName", "Email"];

/// Output added users in the requested format
pub fn output_group_users(
    users: &[UserSharingResult],
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(users)?,
        OutputFormat::Yaml => serde_yml::to_string(users)?,
        OutputFormat::Csv => render_csv(users, no_header),
        OutputFormat::Table => render_table(users, no_header),
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn render_csv(users: &[UserSharingResult], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(users.len() + 1);
    if !no_header {
        lines.push("DisplayName,Email,User,Status".to_string());
    }
    for u in users {
        lines.push(format!(
            "{},{},{},{}",
            escape_csv(u.display_name()),
            escape_csv(u.email()),
            escape_csv(&u.user),
            u.status
        ));
    }
    lines.join("\n")
}

fn render_table(users: &[UserSharingResult], no_header: bool) -> String {
    if users.is_empty() {
        return "No users were added to the group".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    if !no_header {
        table.set_header(DEFAULT_PROPERTIES.iter().map(|p| Cell::new(*p)));
    }

    for u in users {
        table.add_row(vec![Cell::new(u.display_name()), Cell::new(u.email())]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> UserSharingResult {
        UserSharingResult {
            allowed_roles: vec![0],
            display_name: Some("Alex Wilber".to_string()),
            email: Some("Alex.Wilber@contoso.com".to_string()),
            is_user_known: true,
            status: true,
            user: "i:0#.f|membership|Alex.Wilber@contoso.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_properties() {
        assert_eq!(DEFAULT_PROPERTIES, &["DisplayName", "Email"]);
    }

    #[test]
    fn test_table_contains_default_properties_only() {
        let table = render_table(&[alex()], false);
        assert!(table.contains("DisplayName"));
        assert!(table.contains("Email"));
        assert!(table.contains("Alex Wilber"));
        assert!(table.contains("Alex.Wilber@contoso.com"));
        assert!(!table.contains("membership"));
    }

    #[test]
    fn test_table_no_header() {
        let table = render_table(&[alex()], true);
        assert!(!table.contains("DisplayName"));
        assert!(table.contains("Alex Wilber"));
    }

    #[test]
    fn test_table_empty() {
        assert_eq!(render_table(&[], false), "No users were added to the group");
    }

    #[test]
    fn test_csv_escapes_values() {
        let mut user = alex();
        user.display_name = Some("Wilber, Alex".to_string());
        let csv = render_csv(&[user], false);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "DisplayName,Email,User,Status");
        assert_eq!(
            lines[1],
            "\"Wilber, Alex\",Alex.Wilber@contoso.com,i:0#.f|membership|Alex.Wilber@contoso.com,true"
        );
    }

    #[test]
    fn test_csv_no_header() {
        let csv = render_csv(&[alex()], true);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_output_json_and_yaml_do_not_fail() {
        assert!(output_group_users(&[alex()], OutputFormat::Json, false).is_ok());
        assert!(output_group_users(&[alex()], OutputFormat::Yaml, false).is_ok());
    }
}
