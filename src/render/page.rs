//! HTML document assembly
//!
//! The page is static: the package list is embedded once as JSON and the
//! cards are built client-side by `assets/app.js`.

use chrono::{DateTime, Utc};

use crate::config::{GITHUB_WEB_URL, PACKAGE_TYPE};
use crate::fetch::types::{Package, total_versions};
use crate::render::error::RenderError;
use crate::render::escape::{escape_html, json_for_script};
use crate::render::usage::{MavenCoordinates, render_usage};

const STYLE: &str = include_str!("assets/style.css");
const SCRIPT: &str = include_str!("assets/app.js");

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500;700&family=DM+Sans:wght@400;500;600;700&display=swap";

/// Display format of the build time
pub const BUILD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Number of characters of the commit SHA shown in the summary
pub const SHORT_SHA_LEN: usize = 7;

/// Everything besides the packages that the page shows
#[derive(Debug, Clone)]
pub struct PageContext {
    pub owner: String,
    pub repo: String,
    /// Full commit SHA, empty when unknown
    pub commit_sha: String,
    pub build_time: DateTime<Utc>,
}

impl PageContext {
    pub fn new(owner: &str, repo: &str, commit_sha: &str, build_time: DateTime<Utc>) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            commit_sha: commit_sha.to_string(),
            build_time,
        }
    }

    pub fn short_sha(&self) -> String {
        short_sha(&self.commit_sha)
    }

    pub fn formatted_build_time(&self) -> String {
        self.build_time.format(BUILD_TIME_FORMAT).to_string()
    }

    fn repo_url(&self) -> String {
        format!("{}/{}/{}", GITHUB_WEB_URL, self.owner, self.repo)
    }
}

/// Returns the first seven characters of a commit SHA.
pub fn short_sha(commit_sha: &str) -> String {
    commit_sha.chars().take(SHORT_SHA_LEN).collect()
}

/// Two-letter logo text derived from the repository name.
///
/// `openstack-4j` gives `O4`, `widgets` gives `WI`.
pub fn logo_initials(repo: &str) -> String {
    let segments: Vec<&str> = repo
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect();

    let initials: String = match segments.as_slice() {
        [] => "PK".to_string(),
        [single] => single.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    initials.to_uppercase()
}

/// Renders the complete page.
///
/// Packages are shown sorted by name whatever order they are passed in.
/// The output only depends on the arguments, so a fixed `build_time`
/// yields identical bytes.
pub fn render_page(packages: &[Package], ctx: &PageContext) -> Result<String, RenderError> {
    let mut packages = packages.to_vec();
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    let package_json = json_for_script(&packages)?;
    let coordinates = MavenCoordinates::from_packages(&packages);

    let mut html = String::new();
    html.push_str(&render_head(ctx));
    html.push_str("<body>\n\n");
    html.push_str(&render_header(ctx));
    html.push_str("<div class=\"main\">\n  <div class=\"container\">\n");
    html.push_str(&render_summary(&packages, ctx));
    html.push_str("    <div id=\"packageList\"></div>\n\n");
    html.push_str(&render_usage(&ctx.owner, &ctx.repo, &coordinates));
    html.push_str("  </div>\n</div>\n\n");
    html.push_str(&render_footer(ctx));
    html.push_str(&format!(
        "<script>\nconst PACKAGES = {};\n\n{}</script>\n\n",
        package_json, SCRIPT
    ));
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn render_head(ctx: &PageContext) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{repo} Maven Packages</title>
<link href="{fonts}" rel="stylesheet">
<style>
{style}</style>
</head>
"#,
        repo = escape_html(&ctx.repo),
        fonts = escape_html(FONTS_URL),
        style = STYLE,
    )
}

fn render_header(ctx: &PageContext) -> String {
    let repo_url = ctx.repo_url();
    format!(
        r#"<div class="header">
  <div class="container">
    <div class="header-inner">
      <div class="logo-icon">{logo}</div>
      <div class="header-text">
        <h1>{repo} <span>packages</span></h1>
        <div class="header-meta">
          <span>📦 registry: {package_type}</span>
          <a href="{repo_url}">{repo_label}</a>
          <span>更新于 {build_time}</span>
        </div>
      </div>
    </div>
  </div>
</div>

"#,
        logo = escape_html(&logo_initials(&ctx.repo)),
        repo = escape_html(&ctx.repo),
        package_type = PACKAGE_TYPE,
        repo_url = escape_html(&repo_url),
        repo_label = escape_html(repo_url.trim_start_matches("https://")),
        build_time = ctx.formatted_build_time(),
    )
}

fn render_summary(packages: &[Package], ctx: &PageContext) -> String {
    format!(
        r#"    <div class="summary">
      <span><strong>{package_count}</strong> 包</span>
      <span><strong>{version_count}</strong> 版本</span>
      <span>commit: <strong><a href="{commit_url}" style="color:var(--text);text-decoration:none">{short_sha}</a></strong></span>
    </div>

"#,
        package_count = packages.len(),
        version_count = total_versions(packages),
        commit_url = escape_html(&format!("{}/commit/{}", ctx.repo_url(), ctx.commit_sha)),
        short_sha = escape_html(&ctx.short_sha()),
    )
}

fn render_footer(ctx: &PageContext) -> String {
    format!(
        r#"<div class="footer">
  Auto-generated by <a href="{actions_url}">GitHub Actions</a> · {build_time}
</div>

"#,
        actions_url = escape_html(&format!("{}/actions", ctx.repo_url())),
        build_time = ctx.formatted_build_time(),
    )
}
