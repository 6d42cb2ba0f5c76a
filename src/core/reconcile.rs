use indexmap::IndexMap;

/// Keys touched by one reconciliation pass, grouped by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub entered: Vec<String>,
    pub updated: Vec<String>,
    pub exited: Vec<String>,
}

/// Visual elements keyed by a stable identity, kept in data order.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedCollection<E> {
    elements: IndexMap<String, E>,
}

impl<E> Default for KeyedCollection<E> {
    fn default() -> Self {
        Self {
            elements: IndexMap::new(),
        }
    }
}

impl<E> KeyedCollection<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&E> {
        self.elements.get(key)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &E)> {
        self.elements.iter().map(|(key, element)| (key.as_str(), element))
    }

    pub fn values_mut(&mut self) -> impl ExactSizeIterator<Item = &mut E> {
        self.elements.values_mut()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Matches elements against `data` by key.
    ///
    /// Elements whose key is gone are dropped, new keys are built with
    /// `enter`, surviving elements are passed to `update`. Afterwards the
    /// collection follows data order. When a key repeats in `data` only its
    /// first datum is bound.
    pub fn reconcile<D, K, C, U>(
        &mut self,
        data: &[D],
        mut key_of: K,
        mut enter: C,
        mut update: U,
    ) -> ReconcileReport
    where
        K: FnMut(&D) -> &str,
        C: FnMut(&D) -> E,
        U: FnMut(&mut E, &D),
    {
        let mut incoming: IndexMap<&str, &D> = IndexMap::with_capacity(data.len());
        for datum in data {
            incoming.entry(key_of(datum)).or_insert(datum);
        }

        let mut report = ReconcileReport::default();
        self.elements.retain(|key, _| {
            if incoming.contains_key(key.as_str()) {
                true
            } else {
                report.exited.push(key.clone());
                false
            }
        });

        let mut next = IndexMap::with_capacity(incoming.len());
        for (key, datum) in incoming {
            match self.elements.swap_remove(key) {
                Some(mut element) => {
                    update(&mut element, datum);
                    report.updated.push(key.to_owned());
                    next.insert(key.to_owned(), element);
                }
                None => {
                    report.entered.push(key.to_owned());
                    next.insert(key.to_owned(), enter(datum));
                }
            }
        }
        self.elements = next;
        report
    }
}
