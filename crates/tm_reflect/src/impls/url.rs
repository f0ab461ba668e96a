use url::Url;

crate::impl_reflect_opaque!(Url);

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::Reflect;
    use crate::info::TypePath;

    #[test]
    fn url_is_a_leaf() {
        let mut a = Url::parse("https://a.example/").unwrap();
        let b = Url::parse("https://b.example/x").unwrap();
        a.try_apply(&b).unwrap();
        assert_eq!(a.as_str(), "https://b.example/x");
        assert_eq!(Url::type_name(), "Url");
    }
}
