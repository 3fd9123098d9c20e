use pdf_bundle::{BundleError, plan};

fn appendices(counts: &[usize]) -> Vec<(String, usize)> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| (format!("Appendix {}", i + 1), count))
        .collect()
}

#[test]
fn test_plan_worked_scenario() {
    // Main of 3 pages plus two appendices of 2 and 1 pages, with a
    // 20-row TOC: one TOC page, covers on 5 and 8, total 9 pages.
    let plan = plan(3, &appendices(&[2, 1]), 20).unwrap();

    assert_eq!(plan.main_page_count, 3);
    assert_eq!(plan.toc_page_count, 1);
    assert_eq!(plan.total_page_count, 9);

    let first = &plan.appendices[0];
    assert_eq!(first.cover_page, 5);
    assert_eq!(first.content_start, 6);
    assert_eq!(first.content_end(), 7);

    let second = &plan.appendices[1];
    assert_eq!(second.cover_page, 8);
    assert_eq!(second.content_start, 9);
    assert_eq!(second.content_end(), 9);
}

#[test]
fn test_plan_total_is_sum_of_sections() {
    let counts = [4, 1, 7, 2];
    let plan = plan(5, &appendices(&counts), 20).unwrap();

    let content: usize = counts.iter().sum();
    let covers = counts.len();
    assert_eq!(
        plan.total_page_count,
        5 + plan.toc_page_count + covers + content
    );
}

#[test]
fn test_plan_appendices_are_adjacent() {
    let plan = plan(2, &appendices(&[3, 1, 5, 2, 2]), 20).unwrap();

    // First cover sits right after main + TOC
    assert_eq!(
        plan.appendices[0].cover_page,
        plan.main_page_count + plan.toc_page_count + 1
    );
    for pair in plan.appendices.windows(2) {
        assert_eq!(pair[1].cover_page, pair[0].content_end() + 1);
        assert_eq!(pair[1].content_start, pair[1].cover_page + 1);
    }
    assert_eq!(
        plan.appendices.last().unwrap().content_end(),
        plan.total_page_count
    );
}

#[test]
fn test_plan_toc_page_count_rounds_up() {
    // 20 appendices fit one page at 20 rows; 21 spill onto a second,
    // which shifts every appendix position by one.
    let twenty = plan(1, &appendices(&[1; 20]), 20).unwrap();
    assert_eq!(twenty.toc_page_count, 1);
    assert_eq!(twenty.appendices[0].cover_page, 3);

    let twenty_one = plan(1, &appendices(&[1; 21]), 20).unwrap();
    assert_eq!(twenty_one.toc_page_count, 2);
    assert_eq!(twenty_one.appendices[0].cover_page, 4);
}

#[test]
fn test_plan_single_appendix() {
    let plan = plan(1, &appendices(&[1]), 20).unwrap();
    assert_eq!(plan.toc_page_count, 1);
    assert_eq!(plan.appendices[0].cover_page, 3);
    assert_eq!(plan.appendices[0].content_start, 4);
    assert_eq!(plan.total_page_count, 4);
}

#[test]
fn test_plan_rejects_empty_appendix_list() {
    let result = plan(3, &[], 20);
    assert!(matches!(result, Err(BundleError::InvalidPlan(_))));
}

#[test]
fn test_plan_rejects_zero_main_pages() {
    let result = plan(0, &appendices(&[1]), 20);
    assert!(matches!(result, Err(BundleError::InvalidPlan(_))));
}

#[test]
fn test_plan_rejects_zero_row_capacity() {
    let result = plan(1, &appendices(&[1]), 0);
    assert!(matches!(result, Err(BundleError::InvalidPlan(_))));
}

#[test]
fn test_plan_rejects_empty_appendix_and_names_it() {
    let list = vec![
        ("Invoice".to_string(), 2),
        ("Receipt".to_string(), 0),
    ];
    let err = plan(3, &list, 20).unwrap_err();
    match err {
        BundleError::InvalidPlan(msg) => assert!(msg.contains("Receipt")),
        other => panic!("unexpected error: {other}"),
    }
}
