use super::*;

#[test]
fn blog_post_href_joins_base_and_path() {
    assert_eq!(
        blog_post_href("https://blog.example.com", "/hello-world"),
        "https://blog.example.com/hello-world"
    );
}

#[test]
fn blog_post_href_normalizes_slashes() {
    assert_eq!(blog_post_href("https://b/", "/p"), "https://b/p");
    assert_eq!(blog_post_href("https://b", "p"), "https://b/p");
}
