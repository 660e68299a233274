//! Dispatch-level tests: decoded command arrays against a real registry.

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use lodis::cmd::CmdTable;
use lodis::cmd::Extras;
use lodis::dispatcher::dispatch;
use resp::RespValue;
use storage::Registry;

struct Harness {
    table: CmdTable,
    ex: Extras,
    base: PathBuf,
}

impl Harness {
    async fn open() -> Self {
        Self::open_with_pass("").await
    }

    async fn open_with_pass(pass: &str) -> Self {
        let id = ulid::Ulid::new().to_string();
        let base = std::env::temp_dir().join(format!("lodis_cmd_{id}"));
        let registry = Arc::new(Registry::open(&base).await.unwrap());
        Self {
            table: CmdTable::new(),
            ex: Extras::new(registry, pass.to_string()),
            base,
        }
    }

    async fn run(&mut self, parts: &[&[u8]]) -> RespValue {
        let input = parts
            .iter()
            .map(|p| RespValue::bulk_string(Bytes::copy_from_slice(p)))
            .collect();
        dispatch(&self.table, &mut self.ex, input).await.unwrap()
    }

    fn cleanup(self) {
        let _ = std::fs::remove_dir_all(self.base);
    }
}

fn ok() -> RespValue {
    RespValue::simple_string("OK")
}

fn bulk(s: &[u8]) -> RespValue {
    RespValue::bulk_string(Bytes::copy_from_slice(s))
}

#[tokio::test]
async fn string_basics() {
    let mut h = Harness::open().await;

    assert_eq!(h.run(&[b"set" as &[u8], b"foo", b"bar"]).await, ok());
    assert_eq!(h.run(&[b"get" as &[u8], b"foo"]).await, bulk(b"bar"));
    assert_eq!(
        h.run(&[b"get" as &[u8], b"missing"]).await,
        RespValue::null_bulk()
    );

    // Overwrite wins.
    assert_eq!(h.run(&[b"set" as &[u8], b"foo", b"baz"]).await, ok());
    assert_eq!(h.run(&[b"get" as &[u8], b"foo"]).await, bulk(b"baz"));

    assert_eq!(
        h.run(&[b"strlen" as &[u8], b"foo"]).await,
        RespValue::integer(3)
    );
    assert_eq!(
        h.run(&[b"strlen" as &[u8], b"missing"]).await,
        RespValue::integer(0)
    );

    assert_eq!(
        h.run(&[b"append" as &[u8], b"foo", b"!!"]).await,
        RespValue::integer(5)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"foo"]).await, bulk(b"baz!!"));
    assert_eq!(
        h.run(&[b"append" as &[u8], b"fresh", b"abc"]).await,
        RespValue::integer(3)
    );

    assert_eq!(
        h.run(&[b"getset" as &[u8], b"foo", b"new"]).await,
        bulk(b"baz!!")
    );
    assert_eq!(
        h.run(&[b"getset" as &[u8], b"never", b"v"]).await,
        RespValue::null_bulk()
    );

    assert_eq!(
        h.run(&[b"setnx" as &[u8], b"foo", b"x"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"setnx" as &[u8], b"brand", b"x"]).await,
        RespValue::integer(1)
    );

    assert_eq!(
        h.run(&[b"getrange" as &[u8], b"foo", b"0", b"1"]).await,
        bulk(b"ne")
    );
    assert_eq!(
        h.run(&[b"getrange" as &[u8], b"foo", b"-2", b"-1"]).await,
        bulk(b"ew")
    );
    assert_eq!(
        h.run(&[b"getrange" as &[u8], b"missing", b"0", b"-1"]).await,
        bulk(b"")
    );

    assert_eq!(
        h.run(&[b"setrange" as &[u8], b"foo", b"1", b"ap"]).await,
        RespValue::integer(3)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"foo"]).await, bulk(b"nap"));
    assert_eq!(
        h.run(&[b"setrange" as &[u8], b"pad", b"2", b"xy"]).await,
        RespValue::integer(4)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"pad"]).await, bulk(b"\x00\x00xy"));

    h.cleanup();
}

#[tokio::test]
async fn set_options() {
    let mut h = Harness::open().await;

    // NX on absent stores, NX on existing does not.
    assert_eq!(h.run(&[b"set" as &[u8], b"k", b"v1", b"NX"]).await, ok());
    assert_eq!(
        h.run(&[b"set" as &[u8], b"k", b"v2", b"nx"]).await,
        RespValue::null_bulk()
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"k"]).await, bulk(b"v1"));

    // XX mirror-image.
    assert_eq!(
        h.run(&[b"set" as &[u8], b"absent", b"v", b"XX"]).await,
        RespValue::null_bulk()
    );
    assert_eq!(h.run(&[b"set" as &[u8], b"k", b"v3", b"xx"]).await, ok());
    assert_eq!(h.run(&[b"get" as &[u8], b"k"]).await, bulk(b"v3"));

    // Conflicting NX+XX answers nil without writing.
    assert_eq!(
        h.run(&[b"set" as &[u8], b"k", b"v4", b"nx", b"xx"]).await,
        RespValue::null_bulk()
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"k"]).await, bulk(b"v3"));

    assert_eq!(
        h.run(&[b"set" as &[u8], b"k", b"v", b"bogus"]).await,
        RespValue::error("ERR syntax error")
    );
    assert_eq!(
        h.run(&[b"set" as &[u8], b"k", b"v", b"ex"]).await,
        RespValue::error("ERR syntax error")
    );
    assert_eq!(
        h.run(&[b"set" as &[u8], b"k", b"v", b"ex", b"abc"]).await,
        RespValue::error("ERR value is not an integer or out of range")
    );

    // A millisecond expiry lapses and the key reads as absent.
    assert_eq!(
        h.run(&[b"set" as &[u8], b"gone", b"v", b"px", b"1"]).await,
        ok()
    );
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(
        h.run(&[b"get" as &[u8], b"gone"]).await,
        RespValue::null_bulk()
    );
    assert_eq!(
        h.run(&[b"exists" as &[u8], b"gone"]).await,
        RespValue::integer(0)
    );

    // EX keeps the key alive well past the test.
    assert_eq!(
        h.run(&[b"set" as &[u8], b"alive", b"v", b"ex", b"100"]).await,
        ok()
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"alive"]).await, bulk(b"v"));

    h.cleanup();
}

#[tokio::test]
async fn multi_key_strings() {
    let mut h = Harness::open().await;

    assert_eq!(
        h.run(&[b"mset" as &[u8], b"a", b"1", b"b", b"2"]).await,
        ok()
    );
    assert_eq!(
        h.run(&[b"mset" as &[u8], b"a", b"1", b"b"]).await,
        RespValue::error("ERR wrong number of arguments for 'mset' command")
    );

    assert_eq!(
        h.run(&[b"mget" as &[u8], b"a", b"nope", b"b"]).await,
        RespValue::array(vec![bulk(b"1"), RespValue::null_bulk(), bulk(b"2")])
    );

    // Non-string keys answer nil in their slot.
    assert_eq!(
        h.run(&[b"hset" as &[u8], b"h", b"f", b"v"]).await,
        RespValue::integer(1)
    );
    assert_eq!(
        h.run(&[b"mget" as &[u8], b"a", b"h"]).await,
        RespValue::array(vec![bulk(b"1"), RespValue::null_bulk()])
    );

    // MSETNX is all-or-nothing.
    assert_eq!(
        h.run(&[b"msetnx" as &[u8], b"x", b"1", b"a", b"9"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"exists" as &[u8], b"x"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"msetnx" as &[u8], b"x", b"1", b"y", b"2"]).await,
        RespValue::integer(1)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"y"]).await, bulk(b"2"));

    h.cleanup();
}

#[tokio::test]
async fn counters() {
    let mut h = Harness::open().await;

    // INCR on an absent key runs 1..n and leaves n stored.
    for expected in 1..=5 {
        assert_eq!(
            h.run(&[b"incr" as &[u8], b"count"]).await,
            RespValue::integer(expected)
        );
    }
    assert_eq!(h.run(&[b"get" as &[u8], b"count"]).await, bulk(b"5"));

    assert_eq!(
        h.run(&[b"decr" as &[u8], b"count"]).await,
        RespValue::integer(4)
    );
    assert_eq!(
        h.run(&[b"incrby" as &[u8], b"count", b"11"]).await,
        RespValue::integer(15)
    );
    assert_eq!(
        h.run(&[b"decrby" as &[u8], b"count", b"20"]).await,
        RespValue::integer(-5)
    );

    assert_eq!(h.run(&[b"set" as &[u8], b"text", b"abc"]).await, ok());
    assert_eq!(
        h.run(&[b"incr" as &[u8], b"text"]).await,
        RespValue::error("ERR value is not an integer or out of range")
    );

    assert_eq!(
        h.run(&[b"set" as &[u8], b"big", b"9223372036854775807"]).await,
        ok()
    );
    assert_eq!(
        h.run(&[b"incr" as &[u8], b"big"]).await,
        RespValue::error("ERR increment or decrement would overflow")
    );

    assert_eq!(
        h.run(&[b"incrbyfloat" as &[u8], b"float", b"10.5"]).await,
        bulk(b"10.5")
    );
    assert_eq!(
        h.run(&[b"incrbyfloat" as &[u8], b"float", b"0.1"]).await,
        bulk(b"10.6")
    );
    assert_eq!(
        h.run(&[b"incrbyfloat" as &[u8], b"float", b"x"]).await,
        RespValue::error("ERR value is not a valid float")
    );

    h.cleanup();
}

#[tokio::test]
async fn bit_commands() {
    let mut h = Harness::open().await;

    assert_eq!(
        h.run(&[b"bitcount" as &[u8], b"absent"]).await,
        RespValue::integer(0)
    );

    assert_eq!(
        h.run(&[b"set" as &[u8], b"k", b"\xff\xf0\x00"]).await,
        ok()
    );
    assert_eq!(
        h.run(&[b"bitcount" as &[u8], b"k"]).await,
        RespValue::integer(12)
    );
    assert_eq!(
        h.run(&[b"bitcount" as &[u8], b"k", b"1", b"1"]).await,
        RespValue::integer(4)
    );

    // BITPOS truth table.
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"k", b"0"]).await,
        RespValue::integer(12)
    );
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"k", b"1"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"absent", b"1"]).await,
        RespValue::integer(-1)
    );
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"absent", b"0"]).await,
        RespValue::integer(0)
    );
    // All-ones value: no explicit end means the right is read as padded
    // zeros, an explicit end means -1.
    assert_eq!(h.run(&[b"set" as &[u8], b"ones", b"\xff\xff"]).await, ok());
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"ones", b"0"]).await,
        RespValue::integer(16)
    );
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"ones", b"0", b"0", b"-1"]).await,
        RespValue::integer(-1)
    );
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"ones", b"1", b"1"]).await,
        RespValue::integer(8)
    );
    assert_eq!(
        h.run(&[b"bitpos" as &[u8], b"ones", b"2"]).await,
        RespValue::error("ERR The bit argument must be 1 or 0.")
    );

    // GETBIT / SETBIT, MSB-first numbering.
    assert_eq!(
        h.run(&[b"getbit" as &[u8], b"k", b"0"]).await,
        RespValue::integer(1)
    );
    assert_eq!(
        h.run(&[b"getbit" as &[u8], b"k", b"12"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"getbit" as &[u8], b"k", b"999"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"setbit" as &[u8], b"bits", b"7", b"1"]).await,
        RespValue::integer(0)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"bits"]).await, bulk(b"\x01"));
    assert_eq!(
        h.run(&[b"setbit" as &[u8], b"bits", b"7", b"0"]).await,
        RespValue::integer(1)
    );
    assert_eq!(
        h.run(&[b"setbit" as &[u8], b"bits", b"7", b"2"]).await,
        RespValue::error("ERR bit is not an integer or out of range")
    );

    // BITOP over the four operators.
    assert_eq!(h.run(&[b"set" as &[u8], b"x", b"\x0f"]).await, ok());
    assert_eq!(h.run(&[b"set" as &[u8], b"y", b"\xf0\xff"]).await, ok());
    assert_eq!(
        h.run(&[b"bitop" as &[u8], b"and", b"dest", b"x", b"y"]).await,
        RespValue::integer(2)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"dest"]).await, bulk(b"\x00\x00"));
    assert_eq!(
        h.run(&[b"bitop" as &[u8], b"or", b"dest", b"x", b"y"]).await,
        RespValue::integer(2)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"dest"]).await, bulk(b"\xff\xff"));
    assert_eq!(
        h.run(&[b"bitop" as &[u8], b"xor", b"dest", b"x", b"y"]).await,
        RespValue::integer(2)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"dest"]).await, bulk(b"\xff\xff"));
    assert_eq!(
        h.run(&[b"bitop" as &[u8], b"not", b"dest", b"x"]).await,
        RespValue::integer(1)
    );
    assert_eq!(h.run(&[b"get" as &[u8], b"dest"]).await, bulk(b"\xf0"));
    assert_eq!(
        h.run(&[b"bitop" as &[u8], b"not", b"dest", b"x", b"y"]).await,
        RespValue::error("ERR BITOP NOT must be called with a single source key.")
    );
    assert_eq!(
        h.run(&[b"bitop" as &[u8], b"nand", b"dest", b"x", b"y"]).await,
        RespValue::error("ERR syntax error")
    );

    // Any existing non-string operand is a type error.
    assert_eq!(
        h.run(&[b"hset" as &[u8], b"hashed", b"f", b"v"]).await,
        RespValue::integer(1)
    );
    assert_eq!(
        h.run(&[b"bitop" as &[u8], b"or", b"dest", b"x", b"hashed"]).await,
        RespValue::error("WRONGTYPE Operation against a key holding the wrong kind of value")
    );

    h.cleanup();
}

#[tokio::test]
async fn generic_key_commands() {
    let mut h = Harness::open().await;

    assert_eq!(h.run(&[b"set" as &[u8], b"s", b"v"]).await, ok());
    assert_eq!(
        h.run(&[b"hset" as &[u8], b"h", b"f", b"v"]).await,
        RespValue::integer(1)
    );

    assert_eq!(
        h.run(&[b"type" as &[u8], b"s"]).await,
        RespValue::simple_string("string")
    );
    assert_eq!(
        h.run(&[b"type" as &[u8], b"h"]).await,
        RespValue::simple_string("hash")
    );
    assert_eq!(
        h.run(&[b"type" as &[u8], b"nope"]).await,
        RespValue::simple_string("none")
    );

    // EXISTS counts repeats.
    assert_eq!(
        h.run(&[b"exists" as &[u8], b"s", b"s", b"h", b"nope"]).await,
        RespValue::integer(3)
    );

    assert_eq!(
        h.run(&[b"del" as &[u8], b"nope"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"del" as &[u8], b"s", b"h", b"nope"]).await,
        RespValue::integer(2)
    );
    assert_eq!(
        h.run(&[b"exists" as &[u8], b"s", b"h"]).await,
        RespValue::integer(0)
    );

    h.cleanup();
}

#[tokio::test]
async fn hashes() {
    let mut h = Harness::open().await;

    assert_eq!(
        h.run(&[b"hset" as &[u8], b"h", b"f1", b"v1"]).await,
        RespValue::integer(1)
    );
    assert_eq!(
        h.run(&[b"hset" as &[u8], b"h", b"f1", b"v1b"]).await,
        RespValue::integer(0)
    );
    assert_eq!(h.run(&[b"hget" as &[u8], b"h", b"f1"]).await, bulk(b"v1b"));
    assert_eq!(
        h.run(&[b"hget" as &[u8], b"h", b"nope"]).await,
        RespValue::null_bulk()
    );
    assert_eq!(
        h.run(&[b"hget" as &[u8], b"nokey", b"f"]).await,
        RespValue::null_bulk()
    );

    assert_eq!(
        h.run(&[b"hsetnx" as &[u8], b"h", b"f1", b"x"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"hsetnx" as &[u8], b"h", b"f2", b"v2"]).await,
        RespValue::integer(1)
    );

    assert_eq!(
        h.run(&[b"hmset" as &[u8], b"h", b"f3", b"v3", b"f4", b"v4"]).await,
        ok()
    );
    assert_eq!(
        h.run(&[b"hmset" as &[u8], b"h", b"f5"]).await,
        RespValue::error("ERR wrong number of arguments for 'hmset' command")
    );

    assert_eq!(
        h.run(&[b"hlen" as &[u8], b"h"]).await,
        RespValue::integer(4)
    );
    assert_eq!(
        h.run(&[b"hstrlen" as &[u8], b"h", b"f3"]).await,
        RespValue::integer(2)
    );
    assert_eq!(
        h.run(&[b"hexists" as &[u8], b"h", b"f3"]).await,
        RespValue::integer(1)
    );
    assert_eq!(
        h.run(&[b"hexists" as &[u8], b"h", b"zzz"]).await,
        RespValue::integer(0)
    );

    assert_eq!(
        h.run(&[b"hmget" as &[u8], b"h", b"f1", b"zzz", b"f4"]).await,
        RespValue::array(vec![bulk(b"v1b"), RespValue::null_bulk(), bulk(b"v4")])
    );
    assert_eq!(
        h.run(&[b"hmget" as &[u8], b"nokey", b"a", b"b"]).await,
        RespValue::array(vec![RespValue::null_bulk(), RespValue::null_bulk()])
    );

    // HGETALL carries field,value adjacent pairs.
    let all = h.run(&[b"hgetall" as &[u8], b"h"]).await;
    let items = all.into_vec().unwrap();
    assert_eq!(items.len(), 8);
    let pairs: Vec<(RespValue, RespValue)> = items
        .chunks_exact(2)
        .map(|c| (c[0].clone(), c[1].clone()))
        .collect();
    assert!(pairs.contains(&(bulk(b"f1"), bulk(b"v1b"))));
    assert!(pairs.contains(&(bulk(b"f4"), bulk(b"v4"))));

    let keys = h.run(&[b"hkeys" as &[u8], b"h"]).await.into_vec().unwrap();
    assert_eq!(keys.len(), 4);
    let vals = h.run(&[b"hvals" as &[u8], b"h"]).await.into_vec().unwrap();
    assert_eq!(vals.len(), 4);
    assert_eq!(
        h.run(&[b"hkeys" as &[u8], b"nokey"]).await,
        RespValue::array([])
    );

    // HDEL reports the count actually deleted; repeats count once.
    assert_eq!(
        h.run(&[b"hdel" as &[u8], b"h", b"f1", b"f1", b"zzz", b"f2"]).await,
        RespValue::integer(2)
    );
    assert_eq!(
        h.run(&[b"hlen" as &[u8], b"h"]).await,
        RespValue::integer(2)
    );

    // Deleting the last fields removes the key entirely.
    assert_eq!(
        h.run(&[b"hdel" as &[u8], b"h", b"f3", b"f4"]).await,
        RespValue::integer(2)
    );
    assert_eq!(
        h.run(&[b"exists" as &[u8], b"h"]).await,
        RespValue::integer(0)
    );
    assert_eq!(
        h.run(&[b"hdel" as &[u8], b"h", b"f1"]).await,
        RespValue::integer(0)
    );

    assert_eq!(
        h.run(&[b"hincrby" as &[u8], b"nums", b"n", b"5"]).await,
        RespValue::integer(5)
    );
    assert_eq!(
        h.run(&[b"hincrby" as &[u8], b"nums", b"n", b"-8"]).await,
        RespValue::integer(-3)
    );
    assert_eq!(
        h.run(&[b"hincrby" as &[u8], b"nums", b"n", b"x"]).await,
        RespValue::error("ERR value is not an integer or out of range")
    );
    assert_eq!(
        h.run(&[b"hincrbyfloat" as &[u8], b"nums", b"f", b"0.25"]).await,
        bulk(b"0.25")
    );
    assert_eq!(
        h.run(&[b"hincrbyfloat" as &[u8], b"nums", b"f", b"0.5"]).await,
        bulk(b"0.75")
    );

    h.cleanup();
}

#[tokio::test]
async fn wrong_type_matrix() {
    let mut h = Harness::open().await;
    let wrongtype =
        RespValue::error("WRONGTYPE Operation against a key holding the wrong kind of value");

    assert_eq!(h.run(&[b"set" as &[u8], b"s", b"abc"]).await, ok());
    assert_eq!(
        h.run(&[b"hset" as &[u8], b"h", b"f", b"v"]).await,
        RespValue::integer(1)
    );

    // Hash commands against a string.
    assert_eq!(h.run(&[b"hset" as &[u8], b"s", b"f", b"v"]).await, wrongtype);
    assert_eq!(h.run(&[b"hget" as &[u8], b"s", b"f"]).await, wrongtype);
    assert_eq!(h.run(&[b"hgetall" as &[u8], b"s"]).await, wrongtype);
    assert_eq!(h.run(&[b"hdel" as &[u8], b"s", b"f"]).await, wrongtype);
    assert_eq!(
        h.run(&[b"hincrby" as &[u8], b"s", b"f", b"1"]).await,
        wrongtype
    );

    // String commands against a hash.
    assert_eq!(h.run(&[b"get" as &[u8], b"h"]).await, wrongtype);
    assert_eq!(h.run(&[b"append" as &[u8], b"h", b"x"]).await, wrongtype);
    assert_eq!(h.run(&[b"incr" as &[u8], b"h"]).await, wrongtype);
    assert_eq!(h.run(&[b"strlen" as &[u8], b"h"]).await, wrongtype);
    assert_eq!(
        h.run(&[b"getrange" as &[u8], b"h", b"0", b"1"]).await,
        wrongtype
    );
    assert_eq!(h.run(&[b"getbit" as &[u8], b"h", b"0"]).await, wrongtype);

    // SET replaces regardless of prior type.
    assert_eq!(h.run(&[b"set" as &[u8], b"h", b"now-a-string"]).await, ok());
    assert_eq!(
        h.run(&[b"type" as &[u8], b"h"]).await,
        RespValue::simple_string("string")
    );
    assert_eq!(h.run(&[b"hgetall" as &[u8], b"h"]).await, wrongtype);

    h.cleanup();
}

#[tokio::test]
async fn dispatch_edges() {
    let mut h = Harness::open().await;

    assert_eq!(h.run(&[]).await, RespValue::error("ERR no command"));
    assert_eq!(
        h.run(&[b"nosuch" as &[u8], b"a"]).await,
        RespValue::error("ERR unknown command 'nosuch'")
    );
    assert_eq!(
        h.run(&[b"get" as &[u8]]).await,
        RespValue::error("ERR wrong number of arguments for 'get' command")
    );
    assert_eq!(
        h.run(&[b"get" as &[u8], b"a", b"b"]).await,
        RespValue::error("ERR wrong number of arguments for 'get' command")
    );

    // Names match case-insensitively.
    assert_eq!(h.run(&[b"PiNg" as &[u8]]).await, RespValue::simple_string("PONG"));
    assert_eq!(h.run(&[b"echo" as &[u8], b"hello"]).await, bulk(b"hello"));

    h.cleanup();
}

#[tokio::test]
async fn select_and_flushdb() {
    let mut h = Harness::open().await;

    assert_eq!(h.run(&[b"set" as &[u8], b"k", b"zero"]).await, ok());

    assert_eq!(h.run(&[b"select" as &[u8], b"1"]).await, ok());
    assert_eq!(h.run(&[b"get" as &[u8], b"k"]).await, RespValue::null_bulk());
    assert_eq!(h.run(&[b"set" as &[u8], b"k", b"one"]).await, ok());

    assert_eq!(
        h.run(&[b"select" as &[u8], b"16"]).await,
        RespValue::error("ERR invalid DB index")
    );
    assert_eq!(
        h.run(&[b"select" as &[u8], b"-1"]).await,
        RespValue::error("ERR invalid DB index")
    );
    assert_eq!(
        h.run(&[b"select" as &[u8], b"abc"]).await,
        RespValue::error("ERR invalid DB index")
    );

    // FLUSHDB only clears the selected database.
    assert_eq!(h.run(&[b"flushdb" as &[u8]]).await, ok());
    assert_eq!(h.run(&[b"get" as &[u8], b"k"]).await, RespValue::null_bulk());
    assert_eq!(h.run(&[b"select" as &[u8], b"0"]).await, ok());
    assert_eq!(h.run(&[b"get" as &[u8], b"k"]).await, bulk(b"zero"));

    h.cleanup();
}

#[tokio::test]
async fn auth_gate() {
    let mut h = Harness::open_with_pass("sesame").await;

    assert_eq!(
        h.run(&[b"get" as &[u8], b"x"]).await,
        RespValue::error("NOAUTH Authentication required.")
    );
    // PING is gated too; only AUTH passes through.
    assert_eq!(
        h.run(&[b"ping" as &[u8]]).await,
        RespValue::error("NOAUTH Authentication required.")
    );

    assert_eq!(
        h.run(&[b"auth" as &[u8], b"wrong"]).await,
        RespValue::error("ERR invalid password")
    );
    assert_eq!(
        h.run(&[b"get" as &[u8], b"x"]).await,
        RespValue::error("NOAUTH Authentication required.")
    );

    assert_eq!(h.run(&[b"auth" as &[u8], b"sesame"]).await, ok());
    assert_eq!(h.run(&[b"get" as &[u8], b"x"]).await, RespValue::null_bulk());

    // A failed AUTH drops the authenticated state again.
    assert_eq!(
        h.run(&[b"auth" as &[u8], b"nope"]).await,
        RespValue::error("ERR invalid password")
    );
    assert_eq!(
        h.run(&[b"get" as &[u8], b"x"]).await,
        RespValue::error("NOAUTH Authentication required.")
    );

    h.cleanup();

    // Without a configured password AUTH itself is the error.
    let mut open = Harness::open().await;
    assert_eq!(
        open.run(&[b"auth" as &[u8], b"any"]).await,
        RespValue::error("ERR Client sent AUTH, but no password is set")
    );
    assert_eq!(open.run(&[b"ping" as &[u8]]).await, RespValue::simple_string("PONG"));
    open.cleanup();
}
