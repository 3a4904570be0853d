#![no_main]

use assoc_array::{AssociativeArray, Error, DEFAULT_CAPACITY};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
enum Operation {
    Set { key: Option<u8>, value: u16 },
    Get { key: Option<u8> },
    HasKey { key: Option<u8> },
    Remove { key: Option<u8> },
    Clone,
    Clear,
}

/// Reference behaviour: a plain vector of pairs with the same growth and swap-remove rules.
struct Model {
    pairs: Vec<(u8, u16)>,
    capacity: usize,
}

impl Model {
    fn new() -> Self {
        Self {
            pairs: Vec::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    fn position(&self, key: Option<u8>) -> Option<usize> {
        let key = key?;
        self.pairs.iter().position(|(k, _)| *k == key)
    }

    fn set(&mut self, key: Option<u8>, value: u16) -> Result<(), Error> {
        let key = key.ok_or(Error::NullKey)?;
        if self.pairs.len() >= self.capacity {
            self.capacity *= 2;
        }
        match self.position(Some(key)) {
            Some(i) => self.pairs[i].1 = value,
            None => self.pairs.push((key, value)),
        }
        Ok(())
    }

    fn get(&self, key: Option<u8>) -> Result<u16, Error> {
        self.position(key)
            .map(|i| self.pairs[i].1)
            .ok_or(Error::KeyNotFound)
    }

    fn remove(&mut self, key: Option<u8>) -> Option<u16> {
        let i = self.position(key)?;
        let last = self.pairs.len() - 1;
        let removed = self.pairs[i].1;
        self.pairs[i] = self.pairs[last];
        self.pairs.truncate(last);
        Some(removed)
    }

    fn clone_capacity(&self) -> usize {
        let mut capacity = DEFAULT_CAPACITY;
        while capacity < self.pairs.len() {
            capacity *= 2;
        }
        capacity
    }
}

fn check(array: &AssociativeArray<u8, u16>, model: &Model) {
    assert_eq!(array.size(), model.pairs.len());
    assert_eq!(array.capacity(), model.capacity);
    let pairs: Vec<(u8, u16)> = array.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, model.pairs);
}

fuzz_target!(|ops: Vec<Operation>| {
    let mut array: AssociativeArray<u8, u16> = AssociativeArray::new();
    let mut model = Model::new();

    for op in ops {
        match op {
            Operation::Set { key, value } => {
                assert_eq!(array.set(key, value), model.set(key, value));
            }
            Operation::Get { key } => {
                assert_eq!(array.get(key.as_ref()).copied(), model.get(key));
            }
            Operation::HasKey { key } => {
                assert_eq!(array.has_key(key.as_ref()), model.get(key).is_ok());
            }
            Operation::Remove { key } => {
                assert_eq!(array.remove(key.as_ref()), model.remove(key));
            }
            Operation::Clone => {
                let cloned = array.clone();
                assert_eq!(cloned, array);
                assert_eq!(cloned.capacity(), model.clone_capacity());
                assert_eq!(cloned.to_string(), array.to_string());
            }
            Operation::Clear => {
                array.clear();
                model.pairs.clear();
            }
        }

        check(&array, &model);
    }
});
