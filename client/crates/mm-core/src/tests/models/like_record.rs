use crate::tests::candidate;
use crate::{LikeBatch, LikeRecord, Selection, UserId};

#[test]
fn given_selection_when_from_selection_then_one_record_per_member_in_order() {
    let mut selection = Selection::new(3);
    selection.toggle(&candidate(2, None, None));
    selection.toggle(&candidate(9, None, None));

    let records = LikeRecord::from_selection(&UserId::Number(100), &selection);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].requester_id, UserId::Number(100));
    assert_eq!(records[0].liked_id, UserId::Number(2));
    assert_eq!(records[1].liked_id, UserId::Number(9));
}

#[test]
fn given_records_when_batch_then_body_holds_only_liked_ids() {
    let records = vec![
        LikeRecord {
            requester_id: UserId::Number(100),
            liked_id: UserId::Number(2),
        },
        LikeRecord {
            requester_id: UserId::Number(100),
            liked_id: UserId::Text("b7".into()),
        },
    ];

    let batch = LikeBatch::from_records(&records).unwrap();

    assert_eq!(batch.requester_id, UserId::Number(100));
    assert_eq!(
        serde_json::to_value(&batch).unwrap(),
        serde_json::json!({ "matches": [2, "b7"] })
    );
}

#[test]
fn given_no_records_when_batch_then_none() {
    assert!(LikeBatch::from_records(&[]).is_none());
}
