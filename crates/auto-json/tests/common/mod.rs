//! Shared fixture types for the integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use auto_json::auto_json;

pub const AVG_1: f64 = 3.1415926535897962;
pub const AVG_2: f64 = 4.252603764690807;
pub const AVG_3: f64 = 5.363714875701919;
pub const AVG_MSG: f64 = 6.4748259868120295;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InnerMsg {
    pub id: i32,
    pub name: String,
    pub avg_double: f64,
    pub array_string: Vec<String>,
    pub array_int: Vec<i32>,
}

auto_json! {
    InnerMsg {
        id => "innermsg_id",
        name => "innermsg_name",
        avg_double => "innermsg_avg_double",
        array_string => "innermsg_array_string",
        array_int => "innermsg_array_int",
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct JsonMsg {
    pub id: i32,
    pub name: String,
    pub avg_double: f64,
    pub array_string: Vec<String>,
    pub array_int: Vec<i32>,
    pub array_innermsg: Vec<InnerMsg>,
    pub map_string_string: BTreeMap<String, String>,
    pub map_string_int: BTreeMap<String, i32>,
    pub map_string_innermsg: BTreeMap<String, InnerMsg>,
    pub map_int_string: BTreeMap<i32, String>,
    pub map_int_int: BTreeMap<i32, i32>,
    pub map_int_innermsg: BTreeMap<i32, InnerMsg>,
    pub innermsg: InnerMsg,
}

auto_json! {
    JsonMsg {
        id => "id",
        name => "name",
        avg_double => "avg_double",
        array_string => "array_string",
        array_int => "array_int",
        array_innermsg => "array_innermsg",
        map_string_string => "map_string_string",
        map_string_int => "map_string_int",
        map_string_innermsg => "map_string_innermsg",
        map_int_string => "map_int_string",
        map_int_int => "map_int_int",
        map_int_innermsg => "map_int_innermsg",
        innermsg => "innermsg",
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn inner(n: i32) -> InnerMsg {
    let (avg, base) = match n {
        1 => (AVG_1, 10000),
        2 => (AVG_2, 20000),
        _ => (AVG_3, 30000),
    };
    let first = (n - 1) * 3 + 1;
    InnerMsg {
        id: n,
        name: format!("inner_{n}"),
        avg_double: avg,
        array_string: (first..first + 3).map(|i| format!("inner_string_{i}")).collect(),
        array_int: (1..=4).map(|i| base + i).collect(),
    }
}

pub fn full_msg() -> JsonMsg {
    JsonMsg {
        id: 1001,
        name: "msg".into(),
        avg_double: AVG_MSG,
        array_string: strings(&["msg_string_1", "msg_string_2", "msg_string_3"]),
        array_int: vec![1, 2, 3],
        array_innermsg: vec![inner(1), inner(2), inner(3)],
        map_string_string: (1..=3)
            .map(|i| (format!("key_{i}"), format!("value_{i}")))
            .collect(),
        map_string_int: (1..=3).map(|i| (format!("key_{i}"), i)).collect(),
        map_string_innermsg: (1..=3).map(|i| (format!("key_{i}"), inner(i))).collect(),
        map_int_string: (1..=3).map(|i| (i, format!("value_{i}"))).collect(),
        map_int_int: (1..=3).map(|i| (i, i * 11)).collect(),
        map_int_innermsg: (1..=3).map(|i| (i, inner(i))).collect(),
        innermsg: inner(1),
    }
}

/// `full_msg()` rendered canonically.
pub const FULL_MSG_JSON: &str = r#"{"array_innermsg":[{"innermsg_array_int":[10001,10002,10003,10004],"innermsg_array_string":["inner_string_1","inner_string_2","inner_string_3"],"innermsg_avg_double":3.1415926535897962,"innermsg_id":1,"innermsg_name":"inner_1"},{"innermsg_array_int":[20001,20002,20003,20004],"innermsg_array_string":["inner_string_4","inner_string_5","inner_string_6"],"innermsg_avg_double":4.252603764690807,"innermsg_id":2,"innermsg_name":"inner_2"},{"innermsg_array_int":[30001,30002,30003,30004],"innermsg_array_string":["inner_string_7","inner_string_8","inner_string_9"],"innermsg_avg_double":5.363714875701919,"innermsg_id":3,"innermsg_name":"inner_3"}],"array_int":[1,2,3],"array_string":["msg_string_1","msg_string_2","msg_string_3"],"avg_double":6.4748259868120295,"id":1001,"innermsg":{"innermsg_array_int":[10001,10002,10003,10004],"innermsg_array_string":["inner_string_1","inner_string_2","inner_string_3"],"innermsg_avg_double":3.1415926535897962,"innermsg_id":1,"innermsg_name":"inner_1"},"map_int_innermsg":{"1":{"innermsg_array_int":[10001,10002,10003,10004],"innermsg_array_string":["inner_string_1","inner_string_2","inner_string_3"],"innermsg_avg_double":3.1415926535897962,"innermsg_id":1,"innermsg_name":"inner_1"},"2":{"innermsg_array_int":[20001,20002,20003,20004],"innermsg_array_string":["inner_string_4","inner_string_5","inner_string_6"],"innermsg_avg_double":4.252603764690807,"innermsg_id":2,"innermsg_name":"inner_2"},"3":{"innermsg_array_int":[30001,30002,30003,30004],"innermsg_array_string":["inner_string_7","inner_string_8","inner_string_9"],"innermsg_avg_double":5.363714875701919,"innermsg_id":3,"innermsg_name":"inner_3"}},"map_int_int":{"1":11,"2":22,"3":33},"map_int_string":{"1":"value_1","2":"value_2","3":"value_3"},"map_string_innermsg":{"key_1":{"innermsg_array_int":[10001,10002,10003,10004],"innermsg_array_string":["inner_string_1","inner_string_2","inner_string_3"],"innermsg_avg_double":3.1415926535897962,"innermsg_id":1,"innermsg_name":"inner_1"},"key_2":{"innermsg_array_int":[20001,20002,20003,20004],"innermsg_array_string":["inner_string_4","inner_string_5","inner_string_6"],"innermsg_avg_double":4.252603764690807,"innermsg_id":2,"innermsg_name":"inner_2"},"key_3":{"innermsg_array_int":[30001,30002,30003,30004],"innermsg_array_string":["inner_string_7","inner_string_8","inner_string_9"],"innermsg_avg_double":5.363714875701919,"innermsg_id":3,"innermsg_name":"inner_3"}},"map_string_int":{"key_1":1,"key_2":2,"key_3":3},"map_string_string":{"key_1":"value_1","key_2":"value_2","key_3":"value_3"},"name":"msg"}"#;

/// An `InnerMsg` with every field set away from its default.
pub fn populated_inner() -> InnerMsg {
    InnerMsg {
        id: 1001,
        name: "inner_msg".into(),
        avg_double: AVG_1,
        array_string: strings(&["inner_1", "inner_2"]),
        array_int: vec![1, 2, 3],
    }
}
