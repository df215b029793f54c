//! Usage section with copyable Maven configuration snippets

use crate::config::MAVEN_REGISTRY_URL;
use crate::fetch::types::Package;
use crate::render::escape::escape_html;

/// Coordinates used in the example `<dependency>` snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Default for MavenCoordinates {
    fn default() -> Self {
        Self {
            group_id: "com.example".to_string(),
            artifact_id: "your-artifact".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

impl MavenCoordinates {
    /// Picks the first package with at least one version.
    ///
    /// GitHub names Maven packages `<groupId>.<artifactId>`, so the name is
    /// split on its last dot. Names without a dot fall back to the defaults.
    pub fn from_packages(packages: &[Package]) -> Self {
        packages
            .iter()
            .find_map(|package| {
                let version = package.versions.first()?;
                let (group_id, artifact_id) = package.name.rsplit_once('.')?;
                if group_id.is_empty() || artifact_id.is_empty() {
                    return None;
                }
                Some(Self {
                    group_id: group_id.to_string(),
                    artifact_id: artifact_id.to_string(),
                    version: version.name.clone(),
                })
            })
            .unwrap_or_default()
    }
}

fn open(tag: &str) -> String {
    format!(r#"<span class="t">&lt;{}&gt;</span>"#, tag)
}

fn close(tag: &str) -> String {
    format!(r#"<span class="t">&lt;/{}&gt;</span>"#, tag)
}

fn element(tag: &str, value: &str) -> String {
    format!(
        r#"{}<span class="v">{}</span>{}"#,
        open(tag),
        escape_html(value),
        close(tag)
    )
}

fn code_block(out: &mut String, label: &str, lines: &[String]) {
    out.push_str(&format!(
        "      <div class=\"code-label\">{}</div>\n",
        label
    ));
    out.push_str(&format!(
        "      <div class=\"code-block\">{}<button class=\"copy-btn\" onclick=\"copyBlock(this)\">Copy</button></div>\n",
        lines.join("\n")
    ));
}

/// Renders the usage section for the given repository.
pub fn render_usage(owner: &str, repo: &str, coordinates: &MavenCoordinates) -> String {
    let repository_url = format!("{}/{}/{}", MAVEN_REGISTRY_URL, owner, repo);
    let mut out = String::new();

    out.push_str("    <div class=\"usage-section\">\n");
    out.push_str("      <h3>使用方法 / Usage</h3>\n\n");

    code_block(
        &mut out,
        "~/.m2/settings.xml",
        &[
            open("servers"),
            format!("  {}", open("server")),
            format!("    {}", element("id", "github")),
            format!("    {}", element("username", "YOUR_GITHUB_USERNAME")),
            format!(
                r#"    {}  <span class="c">&lt;!-- read:packages scope --&gt;</span>"#,
                element("password", "ghp_xxxxxxxxxxxx")
            ),
            format!("  {}", close("server")),
            close("servers"),
        ],
    );
    out.push('\n');

    code_block(
        &mut out,
        "pom.xml — 添加仓库",
        &[
            open("repositories"),
            format!("  {}", open("repository")),
            format!("    {}", element("id", "github")),
            format!("    {}", element("url", &repository_url)),
            r#"    <span class="t">&lt;snapshots&gt;&lt;enabled&gt;</span><span class="v">true</span><span class="t">&lt;/enabled&gt;&lt;/snapshots&gt;</span>"#
                .to_string(),
            format!("  {}", close("repository")),
            close("repositories"),
        ],
    );
    out.push('\n');

    code_block(
        &mut out,
        "pom.xml — 添加依赖（示例）",
        &[
            open("dependency"),
            format!("  {}", element("groupId", &coordinates.group_id)),
            format!("  {}", element("artifactId", &coordinates.artifact_id)),
            format!("  {}", element("version", &coordinates.version)),
            close("dependency"),
        ],
    );

    out.push_str("    </div>\n");
    out
}
