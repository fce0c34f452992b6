use paginator::Paginator;

fn main() {
    let current_page = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i64>().ok())
        .unwrap_or(1);

    let paginator = Paginator::new(20, 5, current_page, "example.html?page={:page}");

    println!("{}", paginator);
}
