pub(crate) mod member_bar;
