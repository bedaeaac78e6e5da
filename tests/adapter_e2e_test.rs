//! End-to-end test of the line protocol: play a game through JSON only,
//! then verify it by replay.

use serde_json::{json, Value};

use block_puzzle::adapter::{serve, AdapterConfig, Handler};

fn roundtrip(handler: &Handler, requests: &[Value]) -> Vec<Value> {
    let input: String = requests.iter().map(|r| format!("{r}\n")).collect();
    let mut out = Vec::new();
    serve(handler, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn call(handler: &Handler, request: Value) -> Value {
    roundtrip(handler, &[request]).remove(0)
}

#[test]
fn test_play_then_replay() {
    let handler = Handler::new(&AdapterConfig::default());
    let mut state = call(&handler, json!({"type": "new_game", "seq": 1, "seed": 2024}))["state"].clone();
    let mut moves = Vec::new();
    let mut total = 0u64;

    for seq in 2..12u64 {
        let hints = call(&handler, json!({"type": "hints", "seq": seq, "state": state}));
        let hint = hints["hints"]
            .as_array()
            .unwrap()
            .iter()
            .find(|h| !h["positions"].as_array().unwrap().is_empty())
            .cloned()
            .unwrap();
        let pos = &hint["positions"][0];
        let mv = json!({"piece_index": hint["slot"], "row": pos["row"], "col": pos["col"]});

        let mut request = mv.clone();
        request["type"] = json!("place");
        request["seq"] = json!(seq);
        request["state"] = state.clone();
        let turn = call(&handler, request);
        assert_eq!(turn["ok"], true, "{turn}");
        assert_eq!(turn["seq"], seq);

        total += turn["summary"]["points_awarded"].as_u64().unwrap();
        state = turn["state"].clone();
        moves.push(mv);
        if turn["summary"]["game_over"] == true {
            break;
        }
    }

    assert_eq!(state["score"], total);

    let replay = call(&handler, json!({"type": "replay", "seq": 99, "seed": 2024, "moves": moves}));
    assert_eq!(replay["ok"], true, "{replay}");
    assert_eq!(replay["score"], total);
    assert_eq!(replay["state"], state);
}

#[test]
fn test_error_codes_over_the_wire() {
    let handler = Handler::new(&AdapterConfig::default());
    let state = call(&handler, json!({"type": "new_game", "seed": 1}))["state"].clone();

    let mut ended = state.clone();
    ended["status"] = json!("ended");
    let mut corrupt = state.clone();
    corrupt["hand"] = json!([0, 1]);

    let responses = roundtrip(
        &handler,
        &[
            json!({"type": "place", "seq": 1, "state": state, "piece_index": 7, "row": 0, "col": 0}),
            json!({"type": "place", "seq": 2, "state": ended, "piece_index": 0, "row": 0, "col": 0}),
            json!({"type": "place", "seq": 3, "state": corrupt, "piece_index": 0, "row": 0, "col": 0}),
            json!({"type": "rotate", "seq": 4}),
        ],
    );

    let codes: Vec<_> = responses.iter().map(|r| r["code"].clone()).collect();
    assert_eq!(
        codes,
        vec![
            json!("validation_failed"),
            json!("game_ended"),
            json!("state_corrupt"),
            json!("invalid_request"),
        ]
    );
    assert!(responses.iter().all(|r| r["ok"] == false));
    let seqs: Vec<_> = responses.iter().map(|r| r["seq"].as_u64().unwrap()).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4]);
}
