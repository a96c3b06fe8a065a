//! Renderers for mdtree syntax trees.
//!
//! Both renderers walk a finished tree through [`mdtree_lib::Visitor`] and
//! depend on nothing but the public node shape.
//!
//! ```
//! use mdtree_lib::parse;
//! use mdtree_render::HtmlRenderer;
//!
//! let (tree, _) = parse("doc", "foo *bar*\n");
//! assert_eq!(HtmlRenderer::new().render(tree.root()), "<p>foo <em>bar</em></p>\n");
//! ```

mod echarts;
mod html;


pub use echarts::EChartsRenderer;
pub use html::HtmlRenderer;
