use amygdala::Directory;

#[test]
fn first_page_of_ten_returns_the_first_ten() {
    let directory = Directory::builtin();
    let result = directory.page(1, 10);

    assert_eq!(result.records.len(), 10);
    assert_eq!(result.total, 31);
    assert_eq!(result.total_pages, 4);
    assert_eq!(result.records[0].id, "1");
    assert_eq!(result.records[9].id, "10");
}

#[test]
fn last_page_of_ten_returns_the_remaining_one() {
    let directory = Directory::builtin();
    let result = directory.page(4, 10);

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, "32");
    assert_eq!(result.total_pages, 4);
}

#[test]
fn page_beyond_the_end_is_empty_not_an_error() {
    let directory = Directory::builtin();
    let result = directory.page(100, 10);

    assert!(result.records.is_empty());
    assert_eq!(result.total, 31);
    assert_eq!(result.total_pages, 4);
}

#[test]
fn every_page_is_a_window_of_the_directory_in_order() {
    let directory = Directory::builtin();
    let all = directory.records();

    for per_page in [1u64, 5, 10, 31, 50] {
        for page in 1..=5u64 {
            let result = directory.page(page, per_page);
            assert!(result.records.len() as u64 <= per_page);

            let start = ((page - 1) * per_page) as usize;
            let expected: &[_] = if start >= all.len() {
                &[]
            } else {
                &all[start..(start + per_page as usize).min(all.len())]
            };
            assert_eq!(result.records, expected);
        }
    }
}

#[test]
fn single_record_pages_cover_the_whole_directory() {
    let directory = Directory::builtin();
    let result = directory.page(1, 1);
    assert_eq!(result.total_pages, 31);

    let result = directory.page(31, 1);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].id, "32");

    let result = directory.page(32, 1);
    assert!(result.records.is_empty());
}
