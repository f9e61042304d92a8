use rowmap::Record;

#[derive(Debug, Default, Record)]
struct Post {
    #[key]
    #[auto]
    #[column]
    id: i64,

    #[column("post_title")]
    title: String,

    #[readonly]
    #[column]
    published_at: Option<String>,

    draft: bool,
}

fn main() {
    let post = Post::default();
    assert_eq!(Post::fields().len(), 3);
    assert!(post.get(0).is_ok());
    assert!(!post.draft);
}
