// BookId is the store-assigned identifier of a book record
pub type BookId = i64;

// Book is a stored book record. Publication date and cover URL are opaque text,
// the store never parses or validates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub date_published: String,
    pub cover_url: String,
}

// NewBook carries the caller-supplied fields of a record, without an identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub date_published: String,
    pub cover_url: String,
}

impl NewBook {
    pub fn new(title: &str, author: &str, date_published: &str, cover_url: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            date_published: date_published.to_string(),
            cover_url: cover_url.to_string(),
        }
    }

    pub fn with_id(&self, id: BookId) -> Book {
        Book {
            id,
            title: self.title.to_string(),
            author: self.author.to_string(),
            date_published: self.date_published.to_string(),
            cover_url: self.cover_url.to_string(),
        }
    }
}

impl From<&Book> for NewBook {
    fn from(other: &Book) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            date_published: other.date_published.to_string(),
            cover_url: other.cover_url.to_string(),
        }
    }
}
