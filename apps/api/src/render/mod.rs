// Output renderers for a finished Resume.

pub mod text;
