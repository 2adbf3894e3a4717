//! Option validation for 'group user add'

use reqwest::Url;

use crate::cli::GroupUserAddArgs;
use crate::error::{Result, SpoError};
use crate::graph::UserIdentity;
use crate::spo::groups::GroupRef;

use super::models::AddUserRequest;

fn invalid(message: impl Into<String>) -> SpoError {
    SpoError::Validation(message.into())
}

/// Check that `web_url` is an absolute http(s) URL with a host
fn validate_web_url(web_url: &str) -> Result<String> {
    let url = Url::parse(web_url)
        .map_err(|e| invalid(format!("'{}' is not a valid URL: {}", web_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none_or(str::is_empty) {
        return Err(invalid(format!(
            "'{}' is not a valid absolute site URL",
            web_url
        )));
    }

    Ok(web_url.trim_end_matches('/').to_string())
}

/// Split a comma-separated option value, dropping empty entries
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_group(args: &GroupUserAddArgs) -> Result<GroupRef> {
    match (&args.group_id, &args.group_name) {
        (Some(_), Some(_)) => Err(invalid(
            "Use either groupId or groupName, but not both",
        )),
        (None, None) => Err(invalid("Specify either groupId or groupName")),
        (Some(id), None) => id
            .trim()
            .parse::<u64>()
            .map(GroupRef::Id)
            .map_err(|_| invalid(format!("Specified groupId {} is not a number", id))),
        (None, Some(name)) => Ok(GroupRef::Name(name.clone())),
    }
}

fn validate_users(args: &GroupUserAddArgs) -> Result<Vec<UserIdentity>> {
    let users: Vec<UserIdentity> = match (&args.user_name, &args.email) {
        (Some(_), Some(_)) => {
            return Err(invalid("Use either userName or email, but not both"));
        }
        (None, None) => return Err(invalid("Specify either userName or email")),
        (Some(names), None) => split_list(names)
            .into_iter()
            .map(UserIdentity::UserName)
            .collect(),
        (None, Some(emails)) => split_list(emails)
            .into_iter()
            .map(UserIdentity::Email)
            .collect(),
    };

    if users.is_empty() {
        return Err(invalid("Specify either userName or email"));
    }
    Ok(users)
}

/// Validate the command options and build the request they describe
///
/// Checks group options, then user options, then the URL; the first failure is returned.
pub fn validate(args: &GroupUserAddArgs) -> Result<AddUserRequest> {
    let group = validate_group(args)?;
    let users = validate_users(args)?;
    let web_url = validate_web_url(&args.web_url)?;

    Ok(AddUserRequest {
        web_url,
        group,
        users,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    const WEB_URL: &str = "https://contoso.sharepoint.com/sites/SiteA";
    const USER: &str = "Alex.Wilber@contoso.com";

    fn args() -> GroupUserAddArgs {
        GroupUserAddArgs {
            web_url: WEB_URL.to_string(),
            group_id: None,
            group_name: None,
            user_name: None,
            email: None,
            output: OutputFormat::Table,
        }
    }

    fn assert_invalid(args: &GroupUserAddArgs) {
        match validate(args) {
            Err(SpoError::Validation(msg)) => assert!(!msg.is_empty()),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_fails_when_group_id_and_group_name_both_passed() {
        let mut a = args();
        a.group_id = Some("32".to_string());
        a.group_name = Some("Contoso Site Owners".to_string());
        a.user_name = Some(USER.to_string());
        assert_invalid(&a);
    }

    #[test]
    fn test_fails_when_neither_group_id_nor_group_name_passed() {
        let mut a = args();
        a.user_name = Some(USER.to_string());
        assert_invalid(&a);
    }

    #[test]
    fn test_fails_when_user_name_and_email_both_passed() {
        let mut a = args();
        a.group_id = Some("32".to_string());
        a.user_name = Some(USER.to_string());
        a.email = Some(USER.to_string());
        assert_invalid(&a);
    }

    #[test]
    fn test_fails_when_neither_user_name_nor_email_passed() {
        let mut a = args();
        a.group_id = Some("32".to_string());
        assert_invalid(&a);
    }

    #[test]
    fn test_fails_when_web_url_invalid() {
        let mut a = args();
        a.web_url = "InvalidWEBURL".to_string();
        a.group_id = Some("32".to_string());
        a.user_name = Some(USER.to_string());
        assert_invalid(&a);
    }

    #[test]
    fn test_fails_when_group_id_not_numeric() {
        let mut a = args();
        a.group_id = Some("NOGROUP".to_string());
        a.user_name = Some(USER.to_string());
        match validate(&a) {
            Err(SpoError::Validation(msg)) => assert!(msg.contains("NOGROUP")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_passes_with_all_required_options() {
        let mut a = args();
        a.group_id = Some("32".to_string());
        a.user_name = Some(USER.to_string());

        let request = validate(&a).unwrap();
        assert_eq!(request.web_url, WEB_URL);
        assert_eq!(request.group, GroupRef::Id(32));
        assert_eq!(request.users, vec![UserIdentity::UserName(USER.to_string())]);
    }

    #[test]
    fn test_passes_with_group_name_and_email_list() {
        let mut a = args();
        a.web_url = format!("{}/", WEB_URL);
        a.group_name = Some("Contoso Site Owners".to_string());
        a.email = Some("a@contoso.com, b@contoso.com,".to_string());

        let request = validate(&a).unwrap();
        assert_eq!(request.web_url, WEB_URL);
        assert_eq!(
            request.group,
            GroupRef::Name("Contoso Site Owners".to_string())
        );
        assert_eq!(
            request.users,
            vec![
                UserIdentity::Email("a@contoso.com".to_string()),
                UserIdentity::Email("b@contoso.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_fails_when_user_list_is_blank() {
        let mut a = args();
        a.group_id = Some("32".to_string());
        a.user_name = Some(" , ".to_string());
        assert_invalid(&a);
    }

    #[test]
    fn test_fails_on_non_http_scheme() {
        let mut a = args();
        a.web_url = "mailto:someone@contoso.com".to_string();
        a.group_id = Some("32".to_string());
        a.user_name = Some(USER.to_string());
        assert_invalid(&a);
    }

    #[test]
    fn test_fails_on_negative_group_id() {
        let mut a = args();
        a.group_id = Some("-4".to_string());
        a.user_name = Some(USER.to_string());
        assert_invalid(&a);
    }
}
