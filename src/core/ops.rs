use crate::domain::model::{Book, Product};

/// Uppercases unless the flag is explicitly `Some(false)`.
pub fn format_string(input: &str, uppercase: Option<bool>) -> String {
    if uppercase.unwrap_or(true) {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}

pub fn filter_by_rating(books: &[Book], min_rating: f64) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.rating >= min_rating)
        .cloned()
        .collect()
}

pub fn concat_all<T: Clone>(arrays: &[Vec<T>]) -> Vec<T> {
    arrays.iter().flat_map(|array| array.iter().cloned()).collect()
}

/// First maximum by price; ties keep the earlier product.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|best, product| if product.price > best.price { product } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_books() -> Vec<Book> {
        vec![
            Book {
                title: "Book A".to_string(),
                rating: 4.5,
            },
            Book {
                title: "Book B".to_string(),
                rating: 3.2,
            },
            Book {
                title: "Book C".to_string(),
                rating: 5.0,
            },
        ]
    }

    #[test]
    fn test_format_string() {
        assert_eq!(format_string("Hello", None), "HELLO");
        assert_eq!(format_string("Hello", Some(true)), "HELLO");
        assert_eq!(format_string("Hello", Some(false)), "hello");
    }

    #[test]
    fn test_filter_by_rating() {
        let kept = filter_by_rating(&sample_books(), 4.0);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "Book A");
        assert_eq!(kept[1].title, "Book C");
    }

    #[test]
    fn test_filter_by_rating_keeps_exact_threshold() {
        let books = vec![Book {
            title: "Edge".to_string(),
            rating: 4.0,
        }];
        assert_eq!(filter_by_rating(&books, 4.0).len(), 1);
    }

    #[test]
    fn test_concat_all() {
        assert_eq!(concat_all(&[vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
        assert_eq!(concat_all(&[vec!["a", "b"], vec!["c"]]), vec!["a", "b", "c"]);
        assert!(concat_all::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_most_expensive() {
        let products = vec![
            Product {
                name: "Pen".to_string(),
                price: 10.0,
            },
            Product {
                name: "Notebook".to_string(),
                price: 25.0,
            },
            Product {
                name: "Bag".to_string(),
                price: 50.0,
            },
        ];

        let top = most_expensive(&products).unwrap();
        assert_eq!(top.name, "Bag");
        assert_eq!(top.price, 50.0);
    }

    #[test]
    fn test_most_expensive_empty_and_ties() {
        assert!(most_expensive(&[]).is_none());

        let tied = vec![
            Product {
                name: "First".to_string(),
                price: 10.0,
            },
            Product {
                name: "Second".to_string(),
                price: 10.0,
            },
        ];
        assert_eq!(most_expensive(&tied).unwrap().name, "First");
    }
}
