use crate::books::domain::model::BookEntity;
use crate::core::domain::Counters;
use crate::core::library::LibraryResult;

// title, author, isbn, publisher, year, copies
const SAMPLE_BOOKS: [(&str, &str, &str, &str, i32, u32); 5] = [
    ("Python编程:从入门到实践", "埃里克·马瑟斯", "978-7-115-42802-8", "人民邮电出版社", 2016, 3),
    ("算法导论", "托马斯·科尔曼", "978-7-111-40701-0", "机械工业出版社", 2013, 2),
    ("深度学习", "伊恩·古德费洛", "978-7-111-55719-2", "机械工业出版社", 2017, 1),
    ("机器学习", "周志华", "978-7-111-51946-1", "清华大学出版社", 2016, 2),
    ("数据结构与算法分析", "马克·艾伦·维斯", "978-7-111-14239-1", "机械工业出版社", 2004, 2),
];

pub(crate) fn create_sample_books(counters: &Counters) -> LibraryResult<Vec<BookEntity>> {
    SAMPLE_BOOKS.iter().map(|(title, author, isbn, publisher, year, copies)| {
        let book = BookEntity::new(title, author, isbn, publisher, *year, *copies)?;
        counters.book_created();
        Ok(book)
    }).collect()
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_sample_books;
    use crate::core::domain::Counters;

    #[tokio::test]
    async fn test_should_create_sample_books() {
        let counters = Counters::new();
        let books = create_sample_books(&counters).expect("should create books");
        assert_eq!(5, books.len());
        assert_eq!(5, counters.books_created());
        assert_eq!(10, books.iter().map(|b| b.total_copies).sum::<u32>());
        assert!(books.iter().all(|b| BookEntity::is_valid_isbn(b.isbn.as_str())));
    }
}
