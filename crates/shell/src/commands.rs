//! Shell commands. Each returns the text to print on stdout.

use serde_json::{Value, json};

use rootmanage_auth::AuthError;
use rootmanage_client::api::contracts;

use crate::AppContext;

pub async fn login(ctx: &AppContext, username: &str, password: &str) -> anyhow::Result<String> {
    match ctx.auth.login(username, password).await {
        Ok(_) => {}
        Err(AuthError::Api(err)) if err.is_unauthorized() => {
            return Err(anyhow::Error::new(err).context("login rejected: bad credentials"));
        }
        Err(err) => return Err(anyhow::Error::new(err).context("login failed")),
    }

    let session = ctx.auth.session();
    let display = session
        .user
        .as_ref()
        .and_then(|u| u.display_name())
        .unwrap_or(username)
        .to_string();

    Ok(format!(
        "logged in as {display} ({} modules granted)",
        session.module_keys().len()
    ))
}

pub fn logout(ctx: &AppContext) -> String {
    ctx.auth.logout();
    "logged out".to_string()
}

pub fn whoami(ctx: &AppContext) -> anyhow::Result<String> {
    let session = ctx.auth.session();
    let body = json!({
        "authenticated": session.is_authenticated(),
        "user": session.user,
        "modules": session.module_keys(),
    });
    Ok(serde_json::to_string_pretty(&body)?)
}

pub fn navigate(ctx: &AppContext, path: &str) -> anyhow::Result<String> {
    let nav = ctx.router.navigate(path)?;

    let mut out = if nav.redirected_to_login() {
        format!("{} -> {} (login required)", nav.requested, nav.location.path)
    } else if nav.requested != nav.location.path {
        format!("{} -> {}", nav.requested, nav.location.path)
    } else {
        nav.location.path.clone()
    };

    for view in &nav.views {
        out.push_str(&format!("\n  {} [{}]", view.title, view.component));
    }
    Ok(out)
}

pub fn routes(ctx: &AppContext) -> String {
    ctx.router
        .summaries()
        .into_iter()
        .map(|r| {
            let mut line = format!("{:<36} {}", r.path, r.name.unwrap_or("-"));
            if let Some(to) = r.redirect {
                line.push_str(&format!(" -> {to}"));
            }
            if r.requires_auth {
                line.push_str(" (auth)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn list_contracts(ctx: &AppContext, keyword: Option<&str>) -> anyhow::Result<String> {
    let body = contracts::get_contract_list(ctx.client.as_ref(), keyword).await?;
    pretty(&body)
}

pub async fn show_contract(ctx: &AppContext, id: &str) -> anyhow::Result<String> {
    let body = contracts::get_contract_by_id(ctx.client.as_ref(), id).await?;
    pretty(&body)
}

pub async fn execution_progress(ctx: &AppContext, id: Option<&str>) -> anyhow::Result<String> {
    let body = match id {
        Some(id) => contracts::get_execution_progress(ctx.client.as_ref(), id).await?,
        None => contracts::get_all_execution_progress(ctx.client.as_ref()).await?,
    };
    pretty(&body)
}

fn pretty(body: &Value) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(body)?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rootmanage_client::{ApiError, Method, RecordingClient};
    use rootmanage_core::{InMemoryStorage, KeyValueStorage, keys};

    use super::*;

    fn context() -> (AppContext, Arc<RecordingClient>, Arc<InMemoryStorage>) {
        let storage = Arc::new(InMemoryStorage::new());
        let client = Arc::new(RecordingClient::new());
        let ctx = AppContext::from_parts(storage.clone(), client.clone());
        (ctx, client, storage)
    }

    fn login_body() -> Value {
        json!({
            "userId": "u-1",
            "username": "zhang",
            "name": "Zhang San",
            "token": "T",
            "role": { "name": "sales" },
            "modules": ["contracts", "mall"]
        })
    }

    #[tokio::test]
    async fn login_unlocks_protected_routes_until_logout() {
        let (ctx, client, storage) = context();

        let out = navigate(&ctx, "/home").unwrap();
        assert!(out.starts_with("/home -> /login (login required)"));

        client.respond_with(login_body());
        let out = login(&ctx, "zhang", "secret").await.unwrap();
        assert_eq!(out, "logged in as Zhang San (2 modules granted)");
        assert_eq!(storage.get(keys::TOKEN).unwrap().as_deref(), Some("T"));

        let out = navigate(&ctx, "/").unwrap();
        assert_eq!(
            out,
            "/ -> /home\n  MainLayout [layouts/MainLayout]\n  Home [views/Home]"
        );

        assert_eq!(logout(&ctx), "logged out");
        assert!(storage.is_empty());
        assert!(navigate(&ctx, "/home").unwrap().contains("login required"));
    }

    #[tokio::test]
    async fn failed_login_reports_error() {
        let (ctx, client, _) = context();
        client.fail_with(ApiError::Status {
            status: 400,
            body: "账号未审核通过或已被禁用".to_string(),
        });

        let err = login(&ctx, "zhang", "secret").await.unwrap_err();

        assert!(format!("{err:#}").contains("login failed"));
        assert!(!ctx.auth.is_authenticated());
    }

    #[tokio::test]
    async fn rejected_credentials_are_reported_as_such() {
        let (ctx, client, _) = context();
        client.fail_with(ApiError::Status {
            status: 401,
            body: "用户名或密码错误".to_string(),
        });

        let err = login(&ctx, "zhang", "wrong").await.unwrap_err();

        assert!(format!("{err:#}").starts_with("login rejected: bad credentials"));
        assert!(!ctx.auth.is_authenticated());
    }

    #[tokio::test]
    async fn whoami_reflects_session() {
        let (ctx, client, _) = context();
        let anonymous: Value = serde_json::from_str(&whoami(&ctx).unwrap()).unwrap();
        assert_eq!(anonymous["authenticated"], json!(false));
        assert_eq!(anonymous["user"], Value::Null);

        client.respond_with(login_body());
        login(&ctx, "zhang", "secret").await.unwrap();

        let me: Value = serde_json::from_str(&whoami(&ctx).unwrap()).unwrap();
        assert_eq!(me["authenticated"], json!(true));
        assert_eq!(me["user"]["username"], json!("zhang"));
        assert_eq!(me["modules"], json!(["contracts", "mall"]));
    }

    #[tokio::test]
    async fn contract_commands_forward_to_api() {
        let (ctx, client, _) = context();
        client.respond_with(json!([{ "id": "c1" }]));

        let out = list_contracts(&ctx, Some("pump")).await.unwrap();
        assert!(out.contains("\"c1\""));

        show_contract(&ctx, "c1").await.unwrap();
        execution_progress(&ctx, None).await.unwrap();
        execution_progress(&ctx, Some("c1")).await.unwrap();

        let seen: Vec<_> = client
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();
        assert_eq!(
            seen,
            vec![
                (Method::Get, "/contracts".to_string()),
                (Method::Get, "/contracts/c1".to_string()),
                (Method::Get, "/contracts/execution-progress/list".to_string()),
                (Method::Get, "/contracts/c1/execution-progress".to_string()),
            ]
        );
    }

    #[test]
    fn routes_lists_every_entry() {
        let (ctx, _, _) = context();
        let out = routes(&ctx);

        assert!(out.lines().next().unwrap().starts_with("/login"));
        assert!(out.contains("-> /home (auth)"));
        assert_eq!(out.lines().count(), ctx.router.summaries().len());
    }

    #[test]
    fn unknown_route_is_an_error() {
        let (ctx, _, _) = context();
        assert!(navigate(&ctx, "/nowhere").is_err());
    }
}
