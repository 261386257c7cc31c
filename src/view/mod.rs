pub mod comments;
pub mod detail;
pub mod feed;
pub mod template;

pub use detail::DetailView;
pub use feed::FeedView;
pub use template::Template;

use async_trait::async_trait;

use crate::app::Result;

/// A page the router can activate.
///
/// Concrete views own a [`Template`] and expose it through
/// [`View::template_mut`]; the buffering and commit helpers delegate to it.
#[async_trait(?Send)]
pub trait View {
    fn name(&self) -> &'static str;

    fn template_mut(&mut self) -> &mut Template;

    /// Fetch data for `fragment`, fill the template and commit it.
    async fn render(&mut self, fragment: &str) -> Result<()>;

    fn add_fragment(&mut self, html: String) {
        self.template_mut().add_fragment(html);
    }

    fn consume_fragments(&mut self) -> String {
        self.template_mut().consume_fragments()
    }

    fn set_placeholder(&mut self, name: &str, value: &str) {
        self.template_mut().set_placeholder(name, value);
    }

    fn commit(&mut self) {
        self.template_mut().commit();
    }
}
