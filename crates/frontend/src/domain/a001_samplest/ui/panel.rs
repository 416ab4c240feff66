/// Panels of the sample editor; exactly one is visible.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Panel {
    #[default]
    Request,
    Response,
    Exception,
}

impl Panel {
    /// Value of the `data-panel` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Request => "request",
            Panel::Response => "response",
            Panel::Exception => "exception",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Panel::Request => "Request",
            Panel::Response => "Response",
            Panel::Exception => "Exception",
        }
    }

    pub fn all() -> [Panel; 3] {
        [Panel::Request, Panel::Response, Panel::Exception]
    }
}
