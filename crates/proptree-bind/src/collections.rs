// Dweve PropTree - Ordered Property Trees and Text Encodings
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `Bind` for optionals, sequences and maps.

use crate::{Bind, FromTree, Scalar, ToTree};
use proptree_core::{Element, TreeError, TreeResult};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

impl<T: Bind + Default> Bind for Option<T> {
    /// Absent is not an error; present fills the existing value or a
    /// default one.
    fn bind_from(&mut self, name: &str, from: &mut FromTree<'_>) -> TreeResult<()> {
        if !from.contains(name) {
            return Ok(());
        }
        self.get_or_insert_with(T::default).bind_from(name, from)
    }

    fn bind_to(&self, name: &str, to: &mut ToTree<'_>) -> TreeResult<()> {
        match self {
            Some(value) => value.bind_to(name, to),
            None => Ok(()),
        }
    }
}

impl<T: Bind + Default> Bind for Vec<T> {
    /// One item per child, in tree order, whatever the children's keys.
    fn bind_from(&mut self, name: &str, from: &mut FromTree<'_>) -> TreeResult<()> {
        from.descend(name, |from| {
            let elements = from.child_elements();
            self.resize_with(elements.len(), T::default);
            for (item, element) in self.iter_mut().zip(elements) {
                from.descend_element(element, |from| item.bind_from("", from))?;
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Items become unnamed children, in order.
    fn bind_to(&self, name: &str, to: &mut ToTree<'_>) -> TreeResult<()> {
        to.descend(name, |to| {
            to.ensure();
            for (i, item) in self.iter().enumerate() {
                to.descend_element(Element::indexed("", i), |to| item.bind_to("", to))?;
            }
            Ok(())
        })
    }
}

impl<K: Scalar + Ord, V: Bind + Default> Bind for BTreeMap<K, V> {
    fn bind_from(&mut self, name: &str, from: &mut FromTree<'_>) -> TreeResult<()> {
        from.descend(name, |from| {
            for element in from.child_elements() {
                let key = parse_key::<K>(from, &element)?;
                let value = self.entry(key).or_default();
                from.descend_element(element, |from| value.bind_from("", from))?;
            }
            Ok(())
        })?;
        Ok(())
    }

    fn bind_to(&self, name: &str, to: &mut ToTree<'_>) -> TreeResult<()> {
        to.descend(name, |to| {
            to.ensure();
            for (key, value) in self {
                to.descend_element(Element::new(key.to_text()), |to| value.bind_to("", to))?;
            }
            Ok(())
        })
    }
}

impl<K: Scalar + Eq + Hash, V: Bind + Default> Bind for HashMap<K, V> {
    fn bind_from(&mut self, name: &str, from: &mut FromTree<'_>) -> TreeResult<()> {
        from.descend(name, |from| {
            for element in from.child_elements() {
                let key = parse_key::<K>(from, &element)?;
                let value = self.entry(key).or_default();
                from.descend_element(element, |from| value.bind_from("", from))?;
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Entries are written sorted by key text so output is stable.
    fn bind_to(&self, name: &str, to: &mut ToTree<'_>) -> TreeResult<()> {
        let mut entries: Vec<_> = self.iter().map(|(k, v)| (k.to_text(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        to.descend(name, |to| {
            to.ensure();
            for (key, value) in entries {
                to.descend_element(Element::new(key), |to| value.bind_to("", to))?;
            }
            Ok(())
        })
    }
}

fn parse_key<K: Scalar>(from: &FromTree<'_>, element: &Element) -> TreeResult<K> {
    K::from_text(&element.name).map_err(|reason| {
        TreeError::invalid_value(
            from.path().join(element.name.clone()).to_string(),
            &element.name,
            reason,
        )
    })
}
