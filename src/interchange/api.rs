// src/interchange/api.rs
use crate::error::InterchangeError;
use crate::project::normalize_project_name;
use flexlayout_core::traits::ComponentRegistry;
use flexlayout_core::transport::DeflateTransport;
use flexlayout_core::{
    CanvasSize, MarkupOptions, NodeGraph, ProjectData, SerializedTree, decode_permalink,
    deserialize_tree, encode_permalink, export_markup, import_markup, serialize_root,
};

/// Conversions configured once: which component kinds exist, how markup
/// is written, and how permalinks are compressed.
#[derive(Debug, Clone)]
pub struct Interchange {
    registry: ComponentRegistry,
    markup: MarkupOptions,
    transport: DeflateTransport,
}

impl Interchange {
    pub(crate) fn new(
        registry: ComponentRegistry,
        markup: MarkupOptions,
        transport: DeflateTransport,
    ) -> Self {
        Self {
            registry,
            markup,
            transport,
        }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn markup_options(&self) -> &MarkupOptions {
        &self.markup
    }

    pub fn transport(&self) -> &DeflateTransport {
        &self.transport
    }

    /// Writes a neutral tree as a layout document.
    pub fn tree_to_markup(&self, tree: &SerializedTree) -> Result<String, InterchangeError> {
        Ok(export_markup(tree, &self.markup)?)
    }

    /// Saves an editor graph as a layout document.
    pub fn graph_to_markup(&self, graph: &NodeGraph) -> Result<String, InterchangeError> {
        let tree = serialize_root(graph)?;
        self.tree_to_markup(&tree)
    }

    /// Loads a layout document into an editor graph, resolving every
    /// element name against the registry.
    pub fn markup_to_graph(&self, xml: &str) -> Result<NodeGraph, InterchangeError> {
        let tree = import_markup(xml)?;
        Ok(deserialize_tree(&tree, &self.registry)?)
    }

    /// Passes a tree through the editor graph, the way the editor sees a
    /// document it has just opened.
    pub fn normalize_tree(&self, tree: &SerializedTree) -> Result<SerializedTree, InterchangeError> {
        let graph = deserialize_tree(tree, &self.registry)?;
        Ok(serialize_root(&graph)?)
    }

    /// Encodes a project as permalink data (without the `#pj:` prefix).
    ///
    /// The project name is normalized and the canvas is clamped to the
    /// minimum size first.
    pub async fn share(&self, project: &ProjectData) -> Result<String, InterchangeError> {
        let project = ProjectData {
            project_name: normalize_project_name(&project.project_name),
            canvas_size: project.canvas_size.clamped(),
            tree: project.tree.clone(),
        };
        Ok(encode_permalink(&project, &self.transport).await?)
    }

    /// Encodes a layout document as permalink data.
    pub async fn share_markup(
        &self,
        project_name: &str,
        canvas_size: CanvasSize,
        xml: &str,
    ) -> Result<String, InterchangeError> {
        let tree = self.normalize_tree(&import_markup(xml)?)?;
        self.share(&ProjectData::new(project_name, canvas_size, tree)).await
    }

    /// Decodes permalink data. The tree is checked against the registry.
    pub async fn open(&self, data: &str) -> Result<ProjectData, InterchangeError> {
        let project = decode_permalink(data, &self.transport).await?;
        let tree = self.normalize_tree(&project.tree)?;
        Ok(ProjectData { tree, ..project })
    }

    /// Decodes permalink data straight into a layout document.
    pub async fn open_as_markup(&self, data: &str) -> Result<(ProjectData, String), InterchangeError> {
        let project = self.open(data).await?;
        let xml = self.tree_to_markup(&project.tree)?;
        Ok((project, xml))
    }
}
