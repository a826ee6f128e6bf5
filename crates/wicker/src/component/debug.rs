//! Debug visualization for component trees.
//!
//! ```text
//! nav-menu [NodeId(1v1)]
//! ├── menu-button [NodeId(2v1)]
//! └── nav-panel [NodeId(3v1)]
//!     └── Home [NodeId(4v1)]
//! ```

use std::fmt::{self, Write as FmtWrite};

use super::tree::{ComponentResult, ComponentTree, NodeId};

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node IDs.
    pub show_ids: bool,
    /// Whether to show attribute names and values.
    pub show_attributes: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_attributes: false,
            max_depth: None,
        }
    }
}

impl TreeFormatOptions {
    /// Options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_attributes: true,
            ..Default::default()
        }
    }

    /// Options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_attributes: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a [`ComponentTree`].
pub struct TreeDebug<'a> {
    tree: &'a ComponentTree,
    options: TreeFormatOptions,
}

impl<'a> TreeDebug<'a> {
    /// Create a visualizer with default options.
    pub fn new(tree: &'a ComponentTree) -> Self {
        Self {
            tree,
            options: TreeFormatOptions::default(),
        }
    }

    /// Create a visualizer with custom options.
    pub fn with_options(tree: &'a ComponentTree, options: TreeFormatOptions) -> Self {
        Self { tree, options }
    }

    /// Format every root and its subtree.
    pub fn format_all(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "Component Tree ({} total nodes):",
            self.tree.node_count()
        )
        .expect("write to String");

        let roots = self.tree.roots();
        if roots.is_empty() {
            writeln!(output, "  (empty)").expect("write to String");
        } else {
            for root in roots {
                let _ = self.format_subtree_into(root, &[], &mut output);
            }
        }
        output
    }

    /// Format a subtree starting from a specific node.
    pub fn format_subtree(&self, root: NodeId) -> ComponentResult<String> {
        let mut output = String::new();
        self.format_subtree_into(root, &[], &mut output)?;
        Ok(output)
    }

    fn format_subtree_into(
        &self,
        id: NodeId,
        lineage: &[bool],
        output: &mut String,
    ) -> ComponentResult<()> {
        if let Some(max) = self.options.max_depth {
            if lineage.len() > max {
                return Ok(());
            }
        }

        let name = self.tree.name(id)?;
        let children = self.tree.children(id)?;

        output.push_str(&self.build_prefix(lineage));
        if name.is_empty() {
            output.push_str("(unnamed)");
        } else {
            output.push_str(&name);
        }
        if self.options.show_ids {
            write!(output, " [{:?}]", id).expect("write to String");
        }
        output.push('\n');

        if self.options.show_attributes {
            let attrs = self.tree.attributes(id)?;
            for attr_name in attrs.names() {
                let value = attrs.get_or(&attr_name, "");
                output.push_str(&self.build_attribute_prefix(lineage, children.is_empty()));
                writeln!(output, ".{attr_name} = {value:?}").expect("write to String");
            }
        }

        let child_count = children.len();
        for (index, child) in children.into_iter().enumerate() {
            let mut child_lineage = lineage.to_vec();
            child_lineage.push(index + 1 == child_count);
            self.format_subtree_into(child, &child_lineage, output)?;
        }
        Ok(())
    }

    /// Branch prefix for a node. `lineage` records, per ancestor level,
    /// whether that ancestor was the last among its siblings.
    fn build_prefix(&self, lineage: &[bool]) -> String {
        let (pipe, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|   ", "+-- ", "`-- "),
            TreeStyle::Unicode => ("\u{2502}   ", "\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} "),
        };

        let mut prefix = String::new();
        if let Some((&is_last, ancestors)) = lineage.split_last() {
            for &ancestor_last in ancestors {
                prefix.push_str(if ancestor_last { "    " } else { pipe });
            }
            prefix.push_str(if is_last { corner } else { tee });
        }
        prefix
    }

    fn build_attribute_prefix(&self, lineage: &[bool], leaf: bool) -> String {
        let pipe = match self.options.style {
            TreeStyle::Ascii => "|   ",
            TreeStyle::Unicode => "\u{2502}   ",
        };

        let mut prefix = String::new();
        for &ancestor_last in lineage {
            prefix.push_str(if ancestor_last { "    " } else { pipe });
        }
        prefix.push_str(if leaf { "    " } else { pipe });
        prefix
    }
}

impl fmt::Display for TreeDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_all())
    }
}

impl ComponentTree {
    /// Render the tree as an indented listing for logs and debugging.
    pub fn format_tree(&self) -> String {
        TreeDebug::new(self).format_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::base::ComponentBase;
    use crate::component::traits::Component;
    use std::any::Any;

    struct Plain {
        base: ComponentBase,
        children: Vec<Box<dyn Component>>,
    }

    impl Plain {
        fn new(name: &str) -> Self {
            Self {
                base: ComponentBase::named(name),
                children: Vec::new(),
            }
        }

        fn with_child(mut self, child: Plain) -> Self {
            self.children.push(Box::new(child));
            self
        }
    }

    impl Component for Plain {
        fn component_base(&self) -> &ComponentBase {
            &self.base
        }

        fn component_base_mut(&mut self) -> &mut ComponentBase {
            &mut self.base
        }

        fn render(&mut self) -> Vec<Box<dyn Component>> {
            std::mem::take(&mut self.children)
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_format_empty() {
        let tree = ComponentTree::new();
        let output = TreeDebug::new(&tree).format_all();
        assert!(output.contains("Component Tree"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_format_hierarchy() {
        let mut tree = ComponentTree::new();
        let root = Plain::new("window")
            .with_child(Plain::new("button1"))
            .with_child(Plain::new("button2"));
        tree.mount(None, Box::new(root)).unwrap();

        let output = tree.format_tree();
        assert!(output.contains("window"));
        assert!(output.contains("button1"));
        assert!(output.contains("button2"));
    }

    #[test]
    fn test_format_minimal_hides_ids() {
        let mut tree = ComponentTree::new();
        let root_id = tree.mount(None, Box::new(Plain::new("test"))).unwrap();

        let debug = TreeDebug::with_options(&tree, TreeFormatOptions::minimal());
        let output = debug.format_subtree(root_id).unwrap();

        assert!(output.contains("test"));
        assert!(!output.contains("["));
    }

    #[test]
    fn test_format_attributes() {
        let mut tree = ComponentTree::new();
        let root_id = tree.mount(None, Box::new(Plain::new("glyph"))).unwrap();
        tree.attributes(root_id).unwrap().set("data-active", "true");

        let debug = TreeDebug::with_options(&tree, TreeFormatOptions::detailed());
        let output = debug.format_subtree(root_id).unwrap();
        assert!(output.contains(".data-active = \"true\""));
    }
}
