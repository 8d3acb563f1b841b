//! MEI document skeleton: root, `meiHead`, and the `music` body down to `score`

use super::config::{ExportConfig, MEI_VERSION};
use super::document::{MeiBuilder, NodeId};

/// Build the fixed document skeleton
///
/// ```text
/// mei[meiversion]
/// ├── meiHead
/// │   ├── fileDesc > titleStmt > title        (only with a title)
/// │   └── encodingDesc > appInfo > application[isodate, version] > name
/// └── music > body > mdiv > score             (returned)
/// ```
///
/// Returns the builder and the `score` node the walker populates.
pub fn build_skeleton(config: &ExportConfig, title: Option<&str>) -> (MeiBuilder, NodeId) {
    let mut builder = MeiBuilder::new();

    let root = builder.create_root("mei");
    builder.set_attribute(root, "meiversion", MEI_VERSION);

    create_header(&mut builder, root, config, title);
    let score = create_music(&mut builder, root);

    (builder, score)
}

fn create_header(builder: &mut MeiBuilder, root: NodeId, config: &ExportConfig, title: Option<&str>) {
    let mei_head = builder.create_child(root, "meiHead");

    if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
        let file_desc = builder.create_child(mei_head, "fileDesc");
        let title_stmt = builder.create_child(file_desc, "titleStmt");
        let title_node = builder.create_child(title_stmt, "title");
        builder.set_text(title_node, title);
    }

    let encoding_desc = builder.create_child(mei_head, "encodingDesc");
    let app_info = builder.create_child(encoding_desc, "appInfo");
    let application = builder.create_child(app_info, "application");
    builder.set_attribute(application, "isodate", config.isodate_string());
    builder.set_attribute(application, "version", config.application_version.as_str());

    let name = builder.create_child(application, "name");
    builder.set_text(name, config.application_label());
}

fn create_music(builder: &mut MeiBuilder, root: NodeId) -> NodeId {
    let music = builder.create_child(root, "music");
    let body = builder.create_child(music, "body");
    let mdiv = builder.create_child(body, "mdiv");
    builder.create_child(mdiv, "score")
}
