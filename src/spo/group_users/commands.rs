//! Command handler for 'group user add'

use log::{debug, info};
use reqwest::Url;

use crate::cli::{Cli, GroupUserAddArgs};
use crate::credentials::TokenResolver;
use crate::error::{Result, SpoError};
use crate::graph::{resolve_principals, GraphClient, UserLookup};
use crate::output::output_group_users;
use crate::spo::SpoClient;
use crate::ui::{create_spinner, finish_spinner};

use super::models::{AddUserRequest, UserSharingResult};
use super::validate::validate;

/// Resolve the group, resolve the users, then share
///
/// Calls are made one at a time; the first failure ends the operation.
/// Users missing from the directory fail the resolve step, so ShareObject is
/// never called for them. If ShareObject still reports an error (such as
/// "Couldn't resolve the users."), its `ErrorMessage` is returned unchanged.
pub async fn add_user_to_group<L>(
    client: &SpoClient,
    lookup: &L,
    request: &AddUserRequest,
) -> Result<Vec<UserSharingResult>>
where
    L: UserLookup,
{
    debug!(
        "Adding {} user(s) to group {} on {}",
        request.users.len(),
        request.group,
        request.web_url
    );

    let group_id = client
        .resolve_group_id(&request.web_url, &request.group)
        .await?;
    let principals = resolve_principals(lookup, &request.users).await?;

    client
        .add_users_to_group(&request.web_url, group_id, &principals)
        .await
}

/// Host part of an absolute URL, used to pick the matching token
fn host_of(url: &str, what: &str) -> Result<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .ok_or_else(|| SpoError::Config(format!("{} '{}' has no host", what, url)))
}

/// Run the 'group user add' command
pub async fn run_group_user_add_command(
    cli: &Cli,
    args: &GroupUserAddArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let request = validate(args)?;

    let spo_host = host_of(&request.web_url, "Site URL")?;
    let graph_host = host_of(&cli.graph_endpoint, "Graph endpoint")?;

    let spo_token = TokenResolver::sharepoint(&spo_host).resolve(cli.token.as_deref())?;
    let graph_token = TokenResolver::graph(&graph_host).resolve(cli.graph_token.as_deref())?;

    let client = SpoClient::new(spo_token);
    let graph = GraphClient::new(graph_token, &cli.graph_endpoint);

    let spinner = create_spinner(
        &format!("Adding user(s) to group {}...", request.group),
        cli.quiet(),
    );
    let result = add_user_to_group(&client, &graph, &request).await;
    finish_spinner(spinner);

    let users = result?;
    info!(
        "Added {} user(s) to group {} on {}",
        users.len(),
        request.group,
        request.web_url
    );

    output_group_users(&users, args.output, cli.no_header)?;

    Ok(())
}
