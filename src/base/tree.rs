pub mod forprojects;

use crate::base;

/// Two-level-plus tree. Top-level nodes print flush left; everything below
/// them is drawn with connectors from the charset.
pub struct Tree<'a> {
    charset: &'a base::Charset,
    root: Node<'a>,
}

#[derive(Default)]
struct Node<'a> {
    data: std::borrow::Cow<'a, str>,
    children: Vec<Self>,
}

impl<'a> Node<'a> {
    fn new(data: impl Into<std::borrow::Cow<'a, str>>) -> Self {
        Self {
            data: data.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child and returns it.
    fn push(&mut self, data: impl Into<std::borrow::Cow<'a, str>>) -> &mut Self {
        self.children.push(Self::new(data));
        self.children
            .last_mut()
            .expect("a child should have just been added")
    }
}

impl std::fmt::Display for Tree<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_children(
            node: &Node,
            f: &mut std::fmt::Formatter,
            prefix: &mut String,
            charset: &base::Charset,
        ) -> std::fmt::Result {
            for (i, child) in node.children.iter().enumerate() {
                let (connector, gap) = if i + 1 == node.children.len() {
                    (charset.tree_corner, charset.tree_space)
                } else {
                    (charset.tree_sideways_t, charset.tree_pipe_gap)
                };
                writeln!(f, "{}{}{}", prefix, connector, child.data)?;
                prefix.push_str(gap);
                write_children(child, f, prefix, charset)?;
                prefix.truncate(prefix.len() - gap.len());
            }
            Ok(())
        }

        let mut prefix = String::new();
        for top in self.root.children.iter() {
            writeln!(f, "{}", top.data)?;
            write_children(top, f, &mut prefix, self.charset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_to_string() {
        let charset = base::Charset::default();
        let unicode = base::Charset::default().with_unicode();
        let mut tr = Tree {
            charset: &charset,
            root: Node::default(),
        };
        assert_eq!(tr.to_string(), "");

        let acme = tr.root.push("Acme");
        acme.push("App").push("v2");
        let site = acme.push(String::from("Site"));
        site.push("design");
        site.push("build");
        tr.root.push("Internal");

        assert_eq!(
            tr.to_string(),
            indoc!(
                "
                Acme
                |-- App
                |   `-- v2
                `-- Site
                    |-- design
                    `-- build
                Internal
                "
            )
        );

        tr.charset = &unicode;
        assert!(tr.to_string().contains("\u{2502}   \u{2514}\u{2500}\u{2500} v2"));
    }
}
