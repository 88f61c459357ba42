use formative::domain::AssessmentPage;

fn page(current: usize, total_pages: usize) -> AssessmentPage {
    AssessmentPage {
        assessments: Vec::new(),
        current_page: current,
        total_pages,
        total_assessments: total_pages * 10,
    }
}

#[test]
fn given_first_of_three_pages_when_stepping_then_only_forward_is_possible() {
    let page = page(1, 3);

    assert_eq!(page.next_page(), Some(2));
    assert_eq!(page.prev_page(), None);
}

#[test]
fn given_middle_page_when_stepping_then_both_directions_are_possible() {
    let page = page(2, 3);

    assert_eq!(page.next_page(), Some(3));
    assert_eq!(page.prev_page(), Some(1));
}

#[test]
fn given_last_page_when_stepping_then_only_backward_is_possible() {
    let page = page(3, 3);

    assert_eq!(page.next_page(), None);
    assert_eq!(page.prev_page(), Some(2));
}

#[test]
fn given_single_page_when_stepping_then_neither_direction_is_possible() {
    let page = page(1, 1);

    assert_eq!(page.next_page(), None);
    assert_eq!(page.prev_page(), None);
}

#[test]
fn given_empty_collection_when_stepping_then_stays_put() {
    let page = page(1, 0);

    assert_eq!(page.next_page(), None);
    assert_eq!(page.prev_page(), None);
}
