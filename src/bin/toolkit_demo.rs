//! One-shot tour of the supplemental helpers, driven with fixed inputs.

use chrono::Weekday;
use delayed_compute::core::ops;
use delayed_compute::domain::model::{Book, Car, DayKind, Product, Value};

fn main() {
    println!("{}", ops::format_string("Hello", None));
    println!("{}", ops::format_string("Hello", Some(true)));
    println!("{}", ops::format_string("Hello", Some(false)));

    let books = vec![
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
    ];
    for book in ops::filter_by_rating(&books, 4.0) {
        println!("{} ({})", book.title, book.rating);
    }

    println!("{:?}", ops::concat_all(&[vec![1, 2], vec![3, 4]]));
    println!("{:?}", ops::concat_all(&[vec!["a", "b"], vec!["c"]]));

    let car = Car::new("Toyota", 2020, "Corolla");
    println!("{}", car.info());
    println!("{}", car.model_info());

    println!("{}", Value::Text("hello".to_string()).process());
    println!("{}", Value::Number(10.0).process());

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
    if let Some(product) = ops::most_expensive(&products) {
        println!("{} ({})", product.name, product.price);
    }

    println!("{}", DayKind::of(Weekday::Sat));
    println!("{}", DayKind::of(Weekday::Fri));
}
